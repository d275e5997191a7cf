//! Access control core functionality

use crate::config::AccessConfig;
use crate::utils::error::{DashboardError, Result};
use tracing::{debug, info, warn};

use super::evaluator::{has_access, has_capability};
use super::registry::{RoleRegistry, normalize_path};
use super::types::{Capability, DenialReason, PermissionCheck, Role};

/// Registry plus evaluator, shared by route guards and HTTP handlers
#[derive(Debug, Clone)]
pub struct AccessControl {
    registry: RoleRegistry,
}

impl AccessControl {
    /// Build from configuration: defaults, then configured overrides
    pub fn new(config: &AccessConfig) -> Self {
        info!("Initializing access control");

        let mut registry = RoleRegistry::with_defaults();
        for (path, roles) in &config.routes {
            debug!("Overriding access rule for {} -> {:?}", path, roles);
            registry.insert(path, roles.clone());
        }

        info!("Access control initialized with {} rules", registry.len());
        Self { registry }
    }

    /// Wrap an existing registry
    pub fn from_registry(registry: RoleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Detailed check of a role against a surface
    pub fn check_route(&self, role: Option<Role>, path: &str) -> PermissionCheck {
        let Some(allowed) = self.registry.lookup(path) else {
            warn!(
                path = %normalize_path(path),
                "No access rule registered for surface, denying"
            );
            return PermissionCheck::denied(
                role,
                DenialReason::NotRegistered {
                    path: normalize_path(path),
                },
            );
        };

        match role {
            None => PermissionCheck::denied(None, DenialReason::NoRole),
            Some(role) if has_access(Some(role), allowed) => PermissionCheck::granted(role),
            Some(role) => {
                debug!("Role {} denied access to {}", role, path);
                PermissionCheck::denied(Some(role), DenialReason::RoleNotPermitted { role })
            }
        }
    }

    /// Check a route, turning a denial into the matching error
    pub fn authorize_route(&self, role: Option<Role>, path: &str) -> Result<Role> {
        let check = self.check_route(role, path);
        match (check.granted, check.role, check.denial_reason) {
            (true, Some(role), _) => Ok(role),
            (_, _, Some(DenialReason::NotRegistered { path })) => {
                Err(DashboardError::configuration_gap(path))
            }
            (_, _, Some(reason)) => Err(DashboardError::access_denied(format!(
                "{} ({})",
                normalize_path(path),
                reason
            ))),
            _ => Err(DashboardError::access_denied(normalize_path(path))),
        }
    }

    /// Check a capability, turning a denial into `AccessDenied`
    pub fn authorize_capability(&self, role: Option<Role>, capability: Capability) -> Result<()> {
        if has_capability(role, capability) {
            Ok(())
        } else {
            debug!("Capability {:?} denied for {:?}", capability, role);
            Err(DashboardError::access_denied(capability.description()))
        }
    }
}
