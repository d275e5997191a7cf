//! Configuration integration tests
//!
//! Files on disk, environment overrides and validation together.

#[cfg(test)]
mod tests {
    use squadboard::Config;
    use squadboard::config::Environment;
    use squadboard::auth::Role;
    use squadboard::server::AppState;
    use squadboard::core::backend;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SECRET: &str = "config-test-secret-with-at-least-32-chars";

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_config_file() {
        let file = write_config(&format!(
            r#"
server:
  port: 9090
backend:
  url: "https://club.example.co"
  api_key: "anon"
auth:
  jwt_secret: "{SECRET}"
access:
  routes:
    /scouting: [analyst, admin]
  required_surfaces: [/dashboard, /scouting]
metrics:
  training_target_sessions: 30
"#
        ));

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.server().port, 9090);
        assert_eq!(config.backend().rest_url(), "https://club.example.co/rest/v1");
        assert_eq!(config.access().routes["/scouting"], vec![Role::Analyst, Role::Admin]);
        assert_eq!(config.metrics().training_target_sessions, Some(30));
        assert_eq!(config.auth().environment, Environment::Production);
    }

    #[tokio::test]
    async fn test_missing_required_surface_fails_startup() {
        let file = write_config(&format!(
            r#"
backend:
  in_memory: true
auth:
  jwt_secret: "{SECRET}"
access:
  required_surfaces: [/dashboard, /scouting]
"#
        ));

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("/scouting"));
    }

    #[tokio::test]
    async fn test_dev_override_rejected_in_production() {
        let file = write_config(&format!(
            r#"
backend:
  in_memory: true
auth:
  environment: production
  jwt_secret: "{SECRET}"
  dev_override:
    role: admin
"#
        ));

        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_dev_override_in_development_needs_no_secret() {
        let file = write_config(
            r#"
backend:
  in_memory: true
auth:
  environment: development
  dev_override:
    role: coach
    first_name: "Demo"
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert!(config.auth().demo_mode());

        let state = AppState::new(config, std::sync::Arc::new(squadboard::core::MemoryBackend::new()));
        assert!(state.demo_mode());
        assert!(state.verifier.is_none());
    }

    #[tokio::test]
    async fn test_unknown_role_in_routes_is_rejected() {
        let file = write_config(
            r#"
access:
  routes:
    /reports: [admin, scout]
"#,
        );

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("parse"));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = assert_err!(Config::from_file("/definitely/not/here.yaml").await);
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_in_memory_backend_from_seed_file() {
        let mut seed = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        seed.write_all(
            br#"{"players": [{"id": "p1", "first_name": "Ada", "last_name": "Hale"}]}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.dashboard.backend.in_memory = true;
        config.dashboard.backend.seed_file = Some(seed.path().to_string_lossy().into_owned());

        let backend = assert_ok!(backend::from_config(config.backend()).await);
        let repo = squadboard::core::ClubRepository::new(backend);
        let players = assert_ok!(repo.players().await);
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_env_overrides_are_validated() {
        let mut config = Config::default();
        let result = config.apply_env(|key| match key {
            "SQUADBOARD_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_example_config_is_valid_yaml() {
        let content = include_str!("../../config/dashboard.yaml.example");
        let config = assert_ok!(Config::from_yaml_str(content));
        assert_ok!(config.validate());
    }
}
