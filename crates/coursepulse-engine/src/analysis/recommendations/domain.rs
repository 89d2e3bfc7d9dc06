use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::feedback::CourseId;
use super::super::scoring::FactorScores;

/// Identifier wrapper for tracked recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationId(pub String);

impl std::fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle states. Transitions only move forward: pending -> validated ->
/// in_progress -> resolved, with pending -> dismissed as the one side exit.
/// Nothing transitions back into pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Pending,
    Validated,
    InProgress,
    Resolved,
    Dismissed,
}

impl RecommendationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationStatus::Pending => "pending",
            RecommendationStatus::Validated => "validated",
            RecommendationStatus::InProgress => "in_progress",
            RecommendationStatus::Resolved => "resolved",
            RecommendationStatus::Dismissed => "dismissed",
        }
    }
}

/// A tracked improvement recommendation and its derived priority score.
///
/// `priority_score` is only ever written by a scoring pass, and
/// `is_show_stopper` is supplied by upstream analysis, never derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub course: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub factors: FactorScores,
    pub priority_score: u8,
    pub is_show_stopper: bool,
    pub status: RecommendationStatus,
    pub validator: Option<String>,
    pub validation_notes: Option<String>,
    pub validated_on: Option<NaiveDate>,
}

/// Upstream-supplied fields for a new recommendation; identity, score, and
/// lifecycle state are assigned by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDraft {
    pub course: CourseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub factors: FactorScores,
    pub is_show_stopper: bool,
}
