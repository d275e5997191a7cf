//! REST backend integration tests
//!
//! `ClubRepository` talking to a mocked PostgREST endpoint.

#[cfg(test)]
mod tests {
    use squadboard::DashboardError;
    use squadboard::auth::profile::resolve_profile;
    use squadboard::auth::{ProfileState, Role, SessionIdentity};
    use squadboard::config::BackendConfig;
    use squadboard::core::{ClubRepository, RestBackend};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn repository(server: &MockServer) -> ClubRepository {
        let config = BackendConfig {
            url: server.uri(),
            api_key: "anon-key".to_string(),
            timeout: 5,
            ..Default::default()
        };
        ClubRepository::new(Arc::new(RestBackend::new(&config).unwrap()))
    }

    #[tokio::test]
    async fn test_players_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/players"))
            .and(query_param("order", "last_name.asc"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "p1", "first_name": "Ada", "last_name": "Hale"},
                {"id": "p2", "first_name": "Ben", "last_name": "Zola"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let players = assert_ok!(repository(&server).await.players().await);
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].full_name(), "Ada Hale");
    }

    #[tokio::test]
    async fn test_malformed_rows_are_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/injuries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "i1", "player_id": "p1", "status": "active"},
                {"id": "i2", "player_id": "p2", "status": "mystery"}
            ])))
            .mount(&server)
            .await;

        let injuries = assert_ok!(repository(&server).await.injuries(None).await);
        assert_eq!(injuries.len(), 1);
        assert_eq!(injuries[0].id, "i1");
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/matches"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = assert_err!(repository(&server).await.matches().await);
        assert!(matches!(err, DashboardError::FetchFailure(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_missing_player_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/players"))
            .and(query_param("id", "eq.ghost"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = assert_err!(repository(&server).await.player("ghost").await);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_absent_contract_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/contracts"))
            .and(query_param("player_id", "eq.p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let contract = assert_ok!(repository(&server).await.contract("p1").await);
        assert!(contract.is_none());
    }

    #[tokio::test]
    async fn test_profile_over_rest() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .and(query_param("id", "eq.coach-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "coach-1", "role": "Coach", "first_name": "Sam"}
            ])))
            .mount(&server)
            .await;

        let repo = repository(&server).await;
        let state = resolve_profile(&repo, None, Some(&SessionIdentity::new("coach-1"))).await;
        assert_eq!(state.role(), Some(Role::Coach));
    }

    #[tokio::test]
    async fn test_profile_fetch_failure_is_an_error_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let repo = repository(&server).await;
        let state = resolve_profile(&repo, None, Some(&SessionIdentity::new("coach-1"))).await;
        assert!(matches!(state, ProfileState::Error(_)));
    }
}
