//! Calculator integration tests
//!
//! Records loaded through the repository, then fed to the calculators the
//! way the HTTP handlers do.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::date;
    use crate::common::{SquadFactory, seeded_backend};
    use squadboard::core::ClubRepository;
    use squadboard::core::analytics::{
        MetricValue, RiskLevel, SummaryInputs, attendance_summary, dashboard_summary,
        development_progress, discipline_by_player, risk_level, shot_conversion,
        squad_availability, summarize_discipline,
    };
    use squadboard::core::models::{AttendanceStatus, InjuryStatus};
    use std::sync::Arc;

    fn repository() -> ClubRepository {
        ClubRepository::new(Arc::new(seeded_backend()))
    }

    #[test]
    fn test_risk_thresholds() {
        assert_eq!(risk_level(0, 0), RiskLevel::Safe);
        assert_eq!(risk_level(3, 0), RiskLevel::Safe);
        assert_eq!(risk_level(4, 0), RiskLevel::AtRisk);
        assert_eq!(risk_level(5, 0), RiskLevel::Critical);
        assert_eq!(risk_level(0, 1), RiskLevel::Critical);
        assert_eq!(RiskLevel::AtRisk.label(), "AT RISK");
    }

    #[test]
    fn test_card_types_are_case_insensitive_and_unknowns_ignored() {
        let mut records = SquadFactory::cards("p9", 0, 0);
        records.push(SquadFactory::card("p9", "Yellow"));
        records.push(SquadFactory::card("p9", " RED "));
        records.push(SquadFactory::card("p9", "green"));

        let summary = summarize_discipline(&records);
        assert_eq!(summary.yellow_cards, 1);
        assert_eq!(summary.red_cards, 1);
        assert_eq!(summary.total_cards, 2);
        assert_eq!(summary.risk, RiskLevel::Critical);
    }

    #[tokio::test]
    async fn test_discipline_from_repository() {
        let records = assert_ok!(repository().discipline(None).await);
        let by_player = discipline_by_player(&records);

        assert_eq!(by_player["p1"].risk, RiskLevel::AtRisk);
        assert_eq!(by_player["p3"].risk, RiskLevel::Critical);
        assert!(!by_player.contains_key("p2"));
    }

    #[tokio::test]
    async fn test_player_scoped_discipline() {
        let records = assert_ok!(repository().discipline(Some("p3")).await);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.player_id == "p3"));
    }

    #[test]
    fn test_availability_respects_expected_return() {
        let players = vec![
            SquadFactory::player("p1", "Ada", "Hale"),
            SquadFactory::player("p2", "Ben", "Zola"),
        ];
        let injuries = vec![SquadFactory::injury(
            "p2",
            InjuryStatus::Recovering,
            Some(date(2024, 5, 1)),
        )];

        let before = squad_availability(&players, &injuries, date(2024, 4, 30));
        assert_eq!(before.injured, 1);
        assert_eq!(before.availability_percentage, 50.0);

        let on_return = squad_availability(&players, &injuries, date(2024, 5, 1));
        assert_eq!(on_return.injured, 0);
        assert_eq!(on_return.availability_percentage, 100.0);
    }

    #[test]
    fn test_availability_ignores_cleared_and_foreign_injuries() {
        let players = vec![SquadFactory::player("p1", "Ada", "Hale")];
        let injuries = vec![
            SquadFactory::injury("p1", InjuryStatus::Cleared, None),
            SquadFactory::injury("loanee", InjuryStatus::Active, None),
        ];

        let summary = squad_availability(&players, &injuries, date(2024, 1, 1));
        assert_eq!(summary.total_players, 1);
        assert_eq!(summary.available, 1);
    }

    #[test]
    fn test_empty_squad_is_zero_percent() {
        let summary = squad_availability(&[], &[], date(2024, 1, 1));
        assert_eq!(summary.total_players, 0);
        assert_eq!(summary.availability_percentage, 0.0);
    }

    #[test]
    fn test_shot_conversion_without_shots() {
        let summary = shot_conversion(&[SquadFactory::stat("p1", 0, 0, 0)]);
        assert_eq!(summary.conversion_rate, 0.0);
        assert_eq!(summary.on_target_rate, 0.0);
    }

    #[test]
    fn test_attendance_excludes_excused_sessions() {
        let records = vec![
            SquadFactory::session("p1", 1, AttendanceStatus::Attended),
            SquadFactory::session("p1", 2, AttendanceStatus::Excused),
            SquadFactory::session("p1", 3, AttendanceStatus::Absent),
            SquadFactory::session("p1", 4, AttendanceStatus::Attended),
        ];

        let summary = attendance_summary(&records);
        assert_eq!(summary.sessions, 4);
        assert_eq!(summary.attendance_rate, 66.7);
    }

    #[test]
    fn test_development_progress() {
        let records = vec![
            SquadFactory::session("p1", 1, AttendanceStatus::Attended),
            SquadFactory::session("p1", 2, AttendanceStatus::Attended),
            SquadFactory::session("p1", 3, AttendanceStatus::Absent),
        ];

        assert_eq!(development_progress(&records, None), MetricValue::NotImplemented);
        assert_eq!(development_progress(&records, Some(0)), MetricValue::NotImplemented);
        assert_eq!(development_progress(&records, Some(4)), MetricValue::Computed(50.0));
        assert_eq!(development_progress(&records, Some(1)), MetricValue::Computed(100.0));
    }

    #[tokio::test]
    async fn test_dashboard_summary_over_seeded_club() {
        let repo = repository();
        let (players, injuries, discipline, stats, attendance, matches, goals) = futures::try_join!(
            repo.players(),
            repo.injuries(None),
            repo.discipline(None),
            repo.match_stats(None),
            repo.attendance(None),
            repo.matches(),
            repo.goals(None),
        )
        .unwrap();

        let summary = dashboard_summary(
            SummaryInputs {
                players: &players,
                injuries: &injuries,
                discipline: &discipline,
                match_stats: &stats,
                attendance: &attendance,
                matches: &matches,
                goals: &goals,
            },
            date(2024, 4, 1),
        );

        assert_eq!(summary.squad_size, 3);
        assert_eq!(summary.availability.injured, 1);
        assert_eq!(summary.availability.availability_percentage, 66.7);
        assert_eq!(summary.players_at_risk, 1);
        assert_eq!(summary.players_critical, 1);
        assert_eq!(summary.shooting.shots, 8);
        assert_eq!(summary.shooting.conversion_rate, 25.0);
        assert_eq!(summary.shooting.on_target_rate, 50.0);
        assert_eq!(summary.attendance.attendance_rate, 66.7);
        assert_eq!(summary.matches_played, 1);
        assert_eq!(summary.goals_scored, 2);
    }

    #[test]
    fn test_future_matches_are_not_counted() {
        let summary = dashboard_summary(SummaryInputs::default(), date(2024, 1, 1));
        assert_eq!(summary.matches_played, 0);
        assert_eq!(summary.squad_size, 0);
    }
}
