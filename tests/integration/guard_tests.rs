//! Route guard integration tests
//!
//! The effectful guard shell driven by a real profile resolver over the
//! in-memory backend.

#[cfg(test)]
mod tests {
    use crate::common::{RecordingNavigator, RecordingNotifier, seeded_backend};
    use squadboard::auth::guard::NavigationAttempt;
    use squadboard::auth::{
        AccessControl, GuardContext, GuardDecision, GuardKind, GuardPaths, Notice,
        ProfileResolver, ProfileState, RouteGuard, SessionIdentity, SessionState,
    };
    use squadboard::config::AccessConfig;
    use squadboard::core::ClubRepository;
    use std::sync::Arc;

    struct Harness {
        guard: RouteGuard,
        navigator: Arc<RecordingNavigator>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness() -> Harness {
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let guard = RouteGuard::new(
            Arc::new(AccessControl::new(&AccessConfig::default())),
            GuardPaths::default(),
            navigator.clone(),
            notifier.clone(),
        );
        Harness {
            guard,
            navigator,
            notifier,
        }
    }

    async fn resolved_context(user_id: &str) -> GuardContext {
        let repository = ClubRepository::new(Arc::new(seeded_backend()));
        let resolver = ProfileResolver::new(Arc::new(repository), None);
        let session = SessionState::Active(SessionIdentity::new(user_id));
        resolver.apply_session(&session).await;

        GuardContext {
            session,
            profile: resolver.state(),
            demo_mode: false,
        }
    }

    fn enforce(h: &Harness, attempt: &NavigationAttempt, ctx: &GuardContext) -> GuardDecision {
        h.guard.enforce(GuardKind::Role, attempt, ctx)
    }

    #[tokio::test]
    async fn test_coach_opens_team_analytics() {
        let h = harness();
        let ctx = resolved_context("coach-1").await;
        let attempt = h.guard.begin("/team-analytics");

        assert_eq!(enforce(&h, &attempt, &ctx), GuardDecision::Allow);
        assert!(h.navigator.last().is_none());
        assert_eq!(h.notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_player_is_sent_to_landing_with_one_notice() {
        let h = harness();
        let ctx = resolved_context("player-1").await;
        let attempt = h.guard.begin("/team-analytics");

        // Re-evaluating the same attempt must not repeat the notice
        for _ in 0..3 {
            let decision = enforce(&h, &attempt, &ctx);
            assert_eq!(decision.redirect().unwrap().to, "/dashboard");
        }

        assert_eq!(h.navigator.redirects.lock().len(), 3);
        assert_eq!(h.notifier.count(), 1);
        assert_eq!(
            h.notifier.notices.lock()[0],
            Notice::AccessDenied {
                path: "/team-analytics".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_stale_attempt_reevaluated_after_newer_one_stays_quiet() {
        let h = harness();
        let ctx = resolved_context("player-1").await;
        let analytics = h.guard.begin("/team-analytics");
        let admin = h.guard.begin("/user-management");

        enforce(&h, &analytics, &ctx);
        enforce(&h, &admin, &ctx);
        enforce(&h, &analytics, &ctx);

        assert_eq!(h.notifier.count(), 2);
        assert_eq!(h.navigator.redirects.lock().len(), 3);
    }

    #[tokio::test]
    async fn test_new_attempt_notifies_again() {
        let h = harness();
        let ctx = resolved_context("player-1").await;

        enforce(&h, &h.guard.begin("/reports"), &ctx);
        enforce(&h, &h.guard.begin("/reports"), &ctx);

        assert_eq!(h.notifier.count(), 2);
    }

    #[tokio::test]
    async fn test_unassigned_denied_landing_goes_to_access_denied_page() {
        let h = harness();
        let ctx = resolved_context("nobody").await;
        assert_eq!(ctx.profile.role(), Some(squadboard::auth::Role::Unassigned));

        let decision = enforce(&h, &h.guard.begin("/dashboard"), &ctx);
        assert_eq!(decision.redirect().unwrap().to, "/unauthorized");
    }

    #[tokio::test]
    async fn test_signed_out_redirects_to_login_with_return_path() {
        let h = harness();
        let ctx = GuardContext {
            session: SessionState::SignedOut,
            profile: ProfileState::SignedOut,
            demo_mode: false,
        };

        let decision = enforce(&h, &h.guard.begin("/players/p1"), &ctx);
        let redirect = decision.redirect().unwrap();
        assert_eq!(redirect.to, "/login");
        assert_eq!(redirect.return_to.as_deref(), Some("/players/p1"));
        assert_eq!(
            h.navigator.last(),
            Some(("/login".to_string(), Some("/players/p1".to_string())))
        );
        assert_eq!(h.notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_session_error_notifies_once() {
        let h = harness();
        let ctx = GuardContext {
            session: SessionState::Failed("refresh token expired".to_string()),
            profile: ProfileState::Error("refresh token expired".to_string()),
            demo_mode: false,
        };
        let attempt = h.guard.begin("/matches");

        enforce(&h, &attempt, &ctx);
        enforce(&h, &attempt, &ctx);

        assert_eq!(h.notifier.count(), 1);
        assert!(matches!(
            h.notifier.notices.lock()[0],
            Notice::SessionError { .. }
        ));
    }

    #[tokio::test]
    async fn test_loading_session_renders_pending_without_side_effects() {
        let h = harness();
        let ctx = GuardContext {
            session: SessionState::Loading,
            profile: ProfileState::Loading,
            demo_mode: false,
        };

        assert_eq!(
            enforce(&h, &h.guard.begin("/dashboard"), &ctx),
            GuardDecision::Pending
        );
        assert!(h.navigator.last().is_none());
        assert_eq!(h.notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_authenticated_guard_ignores_role() {
        let h = harness();
        let ctx = resolved_context("nobody").await;
        let decision = h
            .guard
            .enforce(GuardKind::Authenticated, &h.guard.begin("/user-management"), &ctx);
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_demo_mode_allows_without_session() {
        let h = harness();
        let ctx = GuardContext {
            session: SessionState::SignedOut,
            profile: ProfileState::Resolved(squadboard::auth::ActorProfile {
                id: "dev-user".to_string(),
                role: squadboard::auth::Role::Analyst,
                first_name: None,
                last_name: None,
                email: None,
                player_id: None,
            }),
            demo_mode: true,
        };

        assert!(enforce(&h, &h.guard.begin("/advanced-analytics"), &ctx).is_allowed());
    }
}
