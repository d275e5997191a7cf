//! Access control integration tests
//!
//! Registry defaults, configured overrides and the evaluator working
//! together.

#[cfg(test)]
mod tests {
    use squadboard::DashboardError;
    use squadboard::auth::rbac::{
        Capability, Role, can_view_player_data, capabilities_for, has_access,
    };
    use squadboard::auth::{AccessControl, RoleRegistry};
    use squadboard::config::AccessConfig;

    fn access_with(routes: &[(&str, Vec<Role>)]) -> AccessControl {
        let mut config = AccessConfig::default();
        for (path, roles) in routes {
            config.routes.insert(path.to_string(), roles.clone());
        }
        AccessControl::new(&config)
    }

    // ==================== Registry defaults ====================

    #[test]
    fn test_every_assigned_role_reaches_the_landing_page() {
        let access = AccessControl::new(&AccessConfig::default());
        for role in Role::ASSIGNED {
            assert!(
                access.check_route(Some(role), "/dashboard").granted,
                "{} should reach /dashboard",
                role
            );
        }
        assert!(!access.check_route(Some(Role::Unassigned), "/dashboard").granted);
    }

    #[test]
    fn test_user_management_is_admin_only() {
        let access = AccessControl::new(&AccessConfig::default());
        for role in Role::ALL {
            let granted = access.check_route(Some(role), "/user-management").granted;
            assert_eq!(granted, role == Role::Admin, "{}", role);
        }
    }

    #[test]
    fn test_player_detail_pattern_matches_concrete_ids() {
        let registry = RoleRegistry::with_defaults();
        let roles = registry.lookup("/players/p-123").unwrap();
        assert!(roles.contains(&Role::Player));
        assert!(roles.contains(&Role::Coach));
    }

    #[test]
    fn test_unregistered_surface_is_a_configuration_gap() {
        let access = AccessControl::new(&AccessConfig::default());
        let check = access.check_route(Some(Role::Admin), "/scouting-network");
        assert!(!check.granted);
        assert!(check.is_configuration_gap());

        let err = access
            .authorize_route(Some(Role::Admin), "/scouting-network")
            .unwrap_err();
        assert!(matches!(err, DashboardError::ConfigurationGap(_)));
    }

    // ==================== Overrides ====================

    #[test]
    fn test_override_replaces_default_rule() {
        let access = access_with(&[("/reports", vec![Role::Admin])]);
        assert!(access.check_route(Some(Role::Admin), "/reports").granted);
        assert!(!access.check_route(Some(Role::Analyst), "/reports").granted);
    }

    #[test]
    fn test_override_can_add_a_surface() {
        let access = access_with(&[("/scouting", vec![Role::Analyst])]);
        assert_eq!(
            access.authorize_route(Some(Role::Analyst), "/scouting").unwrap(),
            Role::Analyst
        );
        assert!(matches!(
            access.authorize_route(Some(Role::Coach), "/scouting"),
            Err(DashboardError::AccessDenied(_))
        ));
    }

    #[test]
    fn test_empty_override_denies_every_role() {
        let access = access_with(&[("/discipline", vec![])]);
        for role in Role::ALL {
            assert!(!access.check_route(Some(role), "/discipline").granted);
        }
        // Registered, so not a gap
        assert!(!access.check_route(Some(Role::Admin), "/discipline").is_configuration_gap());
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let access = AccessControl::new(&AccessConfig::default());
        assert!(access.check_route(Some(Role::Coach), "/team-analytics/").granted);
    }

    // ==================== Evaluator ====================

    #[test]
    fn test_absent_role_never_has_access() {
        assert!(!has_access(None, &Role::ALL));
        let access = AccessControl::new(&AccessConfig::default());
        assert!(!access.check_route(None, "/dashboard").granted);
    }

    #[test]
    fn test_capabilities_agree_with_surfaces() {
        let registry = RoleRegistry::with_defaults();
        for role in Role::ALL {
            let caps = capabilities_for(role);
            let may_browse = registry.lookup("/players").unwrap().contains(&role);
            assert_eq!(caps.contains(&Capability::ViewAllPlayers), may_browse, "{}", role);
        }
    }

    #[test]
    fn test_player_data_scoping() {
        assert!(can_view_player_data(Some(Role::Player), Some("p1"), "p1"));
        assert!(!can_view_player_data(Some(Role::Player), Some("p1"), "p2"));
        assert!(!can_view_player_data(Some(Role::Player), None, "p1"));
        assert!(can_view_player_data(Some(Role::Analyst), None, "p2"));
        assert!(!can_view_player_data(Some(Role::Unassigned), Some("p1"), "p1"));
    }

    #[test]
    fn test_surfaces_for_unassigned_is_empty() {
        let registry = RoleRegistry::with_defaults();
        assert!(registry.surfaces_for(Role::Unassigned).is_empty());
        assert!(registry.surfaces_for(Role::Player).contains(&"/my-profile"));
    }
}
