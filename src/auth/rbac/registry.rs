//! Route registry mapping dashboard surfaces to allowed roles
//!
//! Lookups fail closed: a path without an entry yields `None`, which every
//! caller treats as "deny all".

use super::types::{Capability, Role};
use std::collections::BTreeMap;

/// Default access rules for every surface of the dashboard
pub fn default_routes() -> Vec<(&'static str, Vec<Role>)> {
    use Role::*;

    let staff = vec![Admin, Management, PerformanceDirector, Analyst, Coach];

    vec![
        ("/dashboard", Role::ASSIGNED.to_vec()),
        ("/players", Capability::ViewAllPlayers.allowed_roles().to_vec()),
        ("/players/:id", Role::ASSIGNED.to_vec()),
        (
            "/player-comparison",
            Capability::ComparePlayers.allowed_roles().to_vec(),
        ),
        (
            "/team-analytics",
            Capability::ViewTeamAnalytics.allowed_roles().to_vec(),
        ),
        (
            "/advanced-analytics",
            Capability::ViewAdvancedAnalytics.allowed_roles().to_vec(),
        ),
        ("/matches", Role::ASSIGNED.to_vec()),
        ("/injuries", staff.clone()),
        ("/discipline", staff),
        ("/training", vec![Admin, PerformanceDirector, Analyst, Coach, Player]),
        ("/reports", vec![Admin, Management, PerformanceDirector, Analyst]),
        (
            "/user-management",
            Capability::ManageUsers.allowed_roles().to_vec(),
        ),
        ("/my-profile", vec![Player]),
    ]
}

/// Static table of surface → allowed roles
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    routes: BTreeMap<String, Vec<Role>>,
}

impl RoleRegistry {
    /// Create an empty registry (denies everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with [`default_routes`]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (path, roles) in default_routes() {
            registry.insert(path, roles);
        }
        registry
    }

    /// Add or replace the rule for a surface
    ///
    /// An empty role list is kept as an explicit "deny all".
    pub fn insert(&mut self, path: &str, roles: Vec<Role>) {
        let mut roles = roles;
        roles.sort();
        roles.dedup();
        self.routes.insert(normalize_path(path), roles);
    }

    /// Allowed roles for `path`, or `None` when the surface is not registered
    ///
    /// Exact entries win; otherwise the `:param` pattern with the most literal
    /// segments is used.
    pub fn lookup(&self, path: &str) -> Option<&[Role]> {
        let path = normalize_path(path);
        if let Some(roles) = self.routes.get(&path) {
            return Some(roles);
        }

        let segments: Vec<&str> = split_segments(&path);
        self.routes
            .iter()
            .filter(|(pattern, _)| pattern.contains(':'))
            .filter_map(|(pattern, roles)| {
                pattern_specificity(pattern, &segments).map(|score| (score, roles))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, roles)| roles.as_slice())
    }

    /// Whether a rule exists for `path`
    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Surfaces from `required` that have no rule
    pub fn missing<'a, I>(&self, required: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        required
            .into_iter()
            .filter(|path| !self.contains(path))
            .map(normalize_path)
            .collect()
    }

    /// Registered surface patterns
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Surfaces a role may open, in path order
    pub fn surfaces_for(&self, role: Role) -> Vec<&str> {
        self.routes
            .iter()
            .filter(|(_, roles)| roles.contains(&role))
            .map(|(path, _)| path.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Strip query/fragment and trailing slashes; always starts with `/`
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Number of literal segments when `pattern` matches, `None` otherwise
fn pattern_specificity(pattern: &str, segments: &[&str]) -> Option<usize> {
    let pattern_segments = split_segments(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut literals = 0;
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if expected.starts_with(':') {
            if actual.is_empty() {
                return None;
            }
        } else if expected == actual {
            literals += 1;
        } else {
            return None;
        }
    }
    Some(literals)
}
