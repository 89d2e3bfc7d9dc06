use std::collections::BTreeMap;

use serde::Serialize;

use super::classify::{classify, suggestions_for, IssueCategory};
use super::feedback::{CourseId, FeedbackRecord};

const MAX_EXAMPLES: usize = 3;
const EXAMPLE_SNIPPET_CHARS: usize = 120;

/// Urgency band derived from an action item's impact/effort ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLabel {
    Urgent,
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            PriorityLabel::Urgent => "urgent",
            PriorityLabel::High => "high",
            PriorityLabel::Medium => "medium",
            PriorityLabel::Low => "low",
        }
    }

    fn from_score(score: f64) -> Self {
        if score >= 2.5 {
            PriorityLabel::Urgent
        } else if score >= 1.5 {
            PriorityLabel::High
        } else if score >= 0.75 {
            PriorityLabel::Medium
        } else {
            PriorityLabel::Low
        }
    }
}

/// Category-level rollup of classified reviews for one course.
#[derive(Debug, Clone, Serialize)]
pub struct ActionItem {
    pub course: CourseId,
    pub category: IssueCategory,
    pub count: usize,
    pub impact: u8,
    pub effort: u8,
    pub priority_score: f64,
    pub priority_label: PriorityLabel,
    pub description: String,
    pub examples: Vec<String>,
    pub suggested_solutions: Vec<&'static str>,
}

/// Roll the full review set up into ranked action items.
///
/// Stateless recompute: every call regenerates the rollups from scratch.
/// The heuristic favors frequently-reported, cheap-to-fix categories over
/// rare, expensive ones, which is the intended trade-off.
pub fn aggregate(course: &CourseId, records: &[FeedbackRecord]) -> Vec<ActionItem> {
    if records.is_empty() {
        return Vec::new();
    }

    #[derive(Default)]
    struct Bucket {
        count: usize,
        examples: Vec<String>,
    }

    let mut buckets: BTreeMap<IssueCategory, Bucket> = BTreeMap::new();
    for record in records {
        let classification = classify(record);
        for category in &classification.categories {
            let bucket = buckets.entry(*category).or_default();
            bucket.count += 1;
            if bucket.examples.len() < MAX_EXAMPLES {
                if let Some(snippet) = example_snippet(record) {
                    bucket.examples.push(snippet);
                }
            }
        }
    }

    let total = records.len();
    let mut items: Vec<ActionItem> = buckets
        .into_iter()
        .map(|(category, bucket)| {
            let impact = impact_for(bucket.count, total);
            let effort = effort_for(category, bucket.count);
            let priority_score = f64::from(impact) / f64::from(effort);

            ActionItem {
                course: course.clone(),
                category,
                count: bucket.count,
                impact,
                effort,
                priority_score,
                priority_label: PriorityLabel::from_score(priority_score),
                description: format!(
                    "{} of {} reviews flag {} issues",
                    bucket.count,
                    total,
                    category.label().to_ascii_lowercase()
                ),
                examples: bucket.examples,
                suggested_solutions: suggestions_for(category).to_vec(),
            }
        })
        .collect();

    // Stable sort; the fixed category iteration order above makes ties
    // deterministic.
    items.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    items
}

/// `floor(frequency * 10)` plus a volume bonus once a category exceeds five
/// reports; integer arithmetic keeps the floor exact.
fn impact_for(count: usize, total: usize) -> u8 {
    let base = count * 10 / total;
    let bonus = if count > 5 { 2 } else { 0 };
    (base + bonus).clamp(1, 10) as u8
}

/// Per-category base cost scaled up as report volume grows. The multiplier
/// is applied in tenths so the floor matches the intended 1.0/1.2/1.5 steps
/// without float drift.
fn effort_for(category: IssueCategory, count: usize) -> u8 {
    let multiplier_tenths: usize = if count > 10 {
        15
    } else if count > 5 {
        12
    } else {
        10
    };
    let scaled = usize::from(category.base_effort()) * multiplier_tenths / 10;
    scaled.clamp(1, 10) as u8
}

fn example_snippet(record: &FeedbackRecord) -> Option<String> {
    let improvement = record
        .improvement_text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());
    let show_stopper = record
        .show_stopper_text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());

    let text = improvement.or(show_stopper)?;
    Some(text.chars().take(EXAMPLE_SNIPPET_CHARS).collect())
}

impl ActionItem {
    pub fn to_view(&self) -> super::report::views::ActionItemView {
        super::report::views::ActionItemView {
            category: self.category,
            category_label: self.category.label(),
            count: self.count,
            impact: self.impact,
            effort: self.effort,
            priority_score: self.priority_score,
            priority_label: self.priority_label.label(),
            description: self.description.clone(),
            examples: self.examples.clone(),
            suggested_solutions: self.suggested_solutions.clone(),
        }
    }
}
