use chrono::NaiveDate;

use crate::analysis::feedback::CourseId;
use crate::analysis::recommendations::{RecommendationDraft, RecommendationRegistry};
use crate::analysis::scoring::{FactorScores, WeightVector};

pub(super) fn weights() -> WeightVector {
    WeightVector {
        impact: 5.0,
        urgency: 4.0,
        effort: 3.0,
        strategic: 2.0,
        trend: 1.0,
    }
}

pub(super) fn zero_weights() -> WeightVector {
    WeightVector {
        impact: 0.0,
        urgency: 0.0,
        effort: 0.0,
        strategic: 0.0,
        trend: 0.0,
    }
}

pub(super) fn baseline_factors() -> FactorScores {
    FactorScores {
        impact: 80.0,
        urgency: 60.0,
        effort: 30.0,
        strategic: 50.0,
        trend: 40.0,
    }
}

pub(super) fn flat_factors(value: f64) -> FactorScores {
    FactorScores {
        impact: value,
        urgency: value,
        effort: 100.0 - value,
        strategic: value,
        trend: value,
    }
}

pub(super) fn draft(title: &str, is_show_stopper: bool, factors: FactorScores) -> RecommendationDraft {
    RecommendationDraft {
        course: CourseId("RUST-101".to_string()),
        title: title.to_string(),
        description: format!("{title} (raised by feedback triage)"),
        category: "technical".to_string(),
        factors,
        is_show_stopper,
    }
}

pub(super) fn registry_with(drafts: Vec<RecommendationDraft>) -> RecommendationRegistry {
    let registry = RecommendationRegistry::new();
    for entry in drafts {
        registry
            .insert(entry, &weights())
            .expect("fixture weights are valid");
    }
    registry
}

pub(super) fn validation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date")
}
