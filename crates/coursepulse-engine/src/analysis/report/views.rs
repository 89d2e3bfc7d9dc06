use serde::Serialize;

use super::super::classify::{IssueCategory, Severity};
use super::super::feedback::CourseId;

#[derive(Debug, Clone, Serialize)]
pub struct SeverityMixEntry {
    pub severity: Severity,
    pub severity_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdownEntry {
    pub category: IssueCategory,
    pub category_label: &'static str,
    pub count: usize,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionItemView {
    pub category: IssueCategory,
    pub category_label: &'static str,
    pub count: usize,
    pub impact: u8,
    pub effort: u8,
    pub priority_score: f64,
    pub priority_label: &'static str,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    pub suggested_solutions: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseFeedbackSummary {
    pub course: CourseId,
    pub total_reviews: usize,
    pub average_rating: f64,
    pub show_stoppers: usize,
    pub severity_mix: Vec<SeverityMixEntry>,
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
    pub action_items: Vec<ActionItemView>,
}
