//! Integration scenarios for the recommendation lifecycle, driven entirely
//! through the public registry API.

mod common {
    use chrono::NaiveDate;

    use coursepulse_engine::analysis::feedback::CourseId;
    use coursepulse_engine::analysis::recommendations::{
        RecommendationDraft, RecommendationRegistry,
    };
    use coursepulse_engine::analysis::scoring::{FactorScores, WeightVector};

    pub(super) fn weights() -> WeightVector {
        WeightVector {
            impact: 5.0,
            urgency: 4.0,
            effort: 3.0,
            strategic: 2.0,
            trend: 1.0,
        }
    }

    pub(super) fn scaled(base: &WeightVector, k: f64) -> WeightVector {
        WeightVector {
            impact: base.impact * k,
            urgency: base.urgency * k,
            effort: base.effort * k,
            strategic: base.strategic * k,
            trend: base.trend * k,
        }
    }

    pub(super) fn draft(title: &str, is_show_stopper: bool, impact: f64) -> RecommendationDraft {
        RecommendationDraft {
            course: CourseId("RUST-101".to_string()),
            title: title.to_string(),
            description: format!("{title}, raised by feedback triage"),
            category: "technical".to_string(),
            factors: FactorScores {
                impact,
                urgency: 60.0,
                effort: 30.0,
                strategic: 50.0,
                trend: 40.0,
            },
            is_show_stopper,
        }
    }

    pub(super) fn seeded_registry() -> RecommendationRegistry {
        let registry = RecommendationRegistry::new();
        for entry in [
            draft("Fix the video pipeline", false, 80.0),
            draft("Grader outage follow-up", true, 20.0),
            draft("Refresh module three", false, 55.0),
        ] {
            registry.insert(entry, &weights()).expect("valid weights");
        }
        registry
    }

    pub(super) fn validation_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
    }
}

mod scoring {
    use super::common::*;

    #[test]
    fn worked_example_scores_sixty_six() {
        let registry = seeded_registry();
        let fix_video = registry
            .ranked()
            .into_iter()
            .find(|record| record.title == "Fix the video pipeline")
            .expect("seeded record");
        // (80*5 + 60*4 + 70*3 + 50*2 + 40*1) / 15 = 66.
        assert_eq!(fix_video.priority_score, 66);
    }

    #[test]
    fn recompute_with_rescaled_weights_changes_no_score() {
        let registry = seeded_registry();
        let before: Vec<u8> = registry
            .ranked()
            .iter()
            .map(|record| record.priority_score)
            .collect();

        registry
            .recompute(&scaled(&weights(), 0.2))
            .expect("rescaled weights are valid");

        let after: Vec<u8> = registry
            .ranked()
            .iter()
            .map(|record| record.priority_score)
            .collect();
        assert_eq!(before, after);
    }
}

mod ranking {
    use super::common::*;

    #[test]
    fn show_stopper_leads_despite_lowest_score() {
        let ranked = seeded_registry().ranked();
        assert_eq!(ranked[0].title, "Grader outage follow-up");
        assert!(ranked[0].is_show_stopper);
        // The rest descend by score.
        assert_eq!(ranked[1].title, "Fix the video pipeline");
        assert_eq!(ranked[2].title, "Refresh module three");
    }
}

mod lifecycle {
    use super::common::*;
    use coursepulse_engine::analysis::recommendations::{
        RecommendationStatus, ValidationError,
    };

    #[test]
    fn validation_trail_is_write_once() {
        let registry = seeded_registry();
        let id = registry.ranked()[0].id.clone();

        registry
            .validate(&id, "Outage confirmed by the platform team", "u-31", validation_date())
            .expect("first validation succeeds");

        // The legacy hook overwrote earlier verdicts on repeat calls; the
        // registry pins the stricter reject-on-revalidation contract.
        let error = registry
            .validate(&id, "Second look", "u-32", validation_date())
            .expect_err("repeat validation rejected");
        assert_eq!(
            error,
            ValidationError::InvalidStateTransition {
                from: RecommendationStatus::Validated
            }
        );

        let record = registry.get(&id).expect("record");
        assert_eq!(record.validator.as_deref(), Some("u-31"));
    }

    #[test]
    fn resolved_records_keep_their_score_history() {
        let registry = seeded_registry();
        let id = registry.ranked()[0].id.clone();
        let score_before = registry.get(&id).expect("record").priority_score;

        registry
            .validate(&id, "Confirmed", "u-31", validation_date())
            .expect("validates");
        registry.start_progress(&id).expect("starts");
        let resolved = registry.resolve(&id).expect("resolves");

        assert_eq!(resolved.status, RecommendationStatus::Resolved);
        assert_eq!(resolved.priority_score, score_before);
    }
}
