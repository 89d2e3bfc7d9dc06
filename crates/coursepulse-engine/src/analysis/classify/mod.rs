mod categories;

pub use categories::IssueCategory;

pub(crate) use categories::suggestions_for;

use std::collections::BTreeSet;

use serde::Serialize;

use super::feedback::normalizer::normalize_review_text;
use super::feedback::FeedbackRecord;

/// Per-review severity, distinct from category-level impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub const fn ordered() -> [Severity; 4] {
        [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
    }
}

/// Classifier output for a single feedback record.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub categories: BTreeSet<IssueCategory>,
    pub severity: Severity,
    pub suggestions: Vec<&'static str>,
}

/// Classify one review's free text into issue categories and a severity.
///
/// Only `improvement_text` and `show_stopper_text` are inspected; praise is
/// not a defect signal. Categories are not mutually exclusive, and an empty
/// review with a good rating classifies to no categories at Low severity.
pub fn classify(record: &FeedbackRecord) -> Classification {
    let mut combined = String::new();
    if let Some(improvement) = record.improvement_text.as_deref() {
        combined.push_str(improvement);
    }
    if let Some(show_stopper) = record.show_stopper_text.as_deref() {
        combined.push(' ');
        combined.push_str(show_stopper);
    }
    let text = normalize_review_text(&combined);

    let mut matched = BTreeSet::new();
    let mut suggestions = Vec::new();
    for rule in categories::CATEGORY_RULES {
        let hit = rule
            .patterns
            .iter()
            .any(|pattern| pattern.iter().all(|term| text.contains(term)));
        if hit {
            matched.insert(rule.category);
            for suggestion in rule.suggestions {
                if !suggestions.contains(suggestion) {
                    suggestions.push(*suggestion);
                }
            }
        }
    }

    Classification {
        categories: matched,
        severity: severity_for(record, &text),
        suggestions,
    }
}

/// First matching rule wins: the show-stopper flag, then explicit
/// high-impact wording, then medium-impact wording, then the rating.
fn severity_for(record: &FeedbackRecord, text: &str) -> Severity {
    if record.is_show_stopper {
        return Severity::Critical;
    }

    if contains_any(text, categories::HIGH_IMPACT_TERMS) {
        return Severity::High;
    }

    if contains_any(text, categories::MEDIUM_IMPACT_TERMS) {
        return Severity::Medium;
    }

    match record.rating {
        0..=2 => Severity::High,
        3 => Severity::Medium,
        _ => Severity::Low,
    }
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
