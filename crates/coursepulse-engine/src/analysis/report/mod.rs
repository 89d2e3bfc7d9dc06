pub mod views;

use std::collections::BTreeMap;

use super::actions::{aggregate, ActionItem};
use super::classify::{classify, IssueCategory, Severity};
use super::feedback::{CourseFeedback, CourseId};
use views::{CategoryBreakdownEntry, CourseFeedbackSummary, SeverityMixEntry};

/// Aggregated classification results for one course's review set.
#[derive(Debug)]
pub struct CourseFeedbackReport {
    course: CourseId,
    total_reviews: usize,
    average_rating: f64,
    show_stoppers: usize,
    severity_counts: BTreeMap<Severity, usize>,
    category_counts: BTreeMap<IssueCategory, usize>,
    action_items: Vec<ActionItem>,
}

impl CourseFeedbackReport {
    pub fn build(feedback: &CourseFeedback) -> Self {
        let records = &feedback.records;
        let total = records.len();

        let mut severity_counts = BTreeMap::new();
        let mut category_counts = BTreeMap::new();
        let mut rating_sum: u32 = 0;
        let mut show_stoppers = 0;

        for record in records {
            let classification = classify(record);
            *severity_counts.entry(classification.severity).or_insert(0) += 1;
            for category in &classification.categories {
                *category_counts.entry(*category).or_insert(0) += 1;
            }
            rating_sum += u32::from(record.rating);
            if record.is_show_stopper {
                show_stoppers += 1;
            }
        }

        let average_rating = if total == 0 {
            0.0
        } else {
            f64::from(rating_sum) / total as f64
        };

        Self {
            course: feedback.course.clone(),
            total_reviews: total,
            average_rating,
            show_stoppers,
            severity_counts,
            category_counts,
            action_items: aggregate(&feedback.course, records),
        }
    }

    pub fn action_items(&self) -> &[ActionItem] {
        &self.action_items
    }

    pub fn summary(&self) -> CourseFeedbackSummary {
        let severity_mix = Severity::ordered()
            .into_iter()
            .filter_map(|severity| {
                self.severity_counts
                    .get(&severity)
                    .map(|count| SeverityMixEntry {
                        severity,
                        severity_label: severity.label(),
                        count: *count,
                    })
            })
            .collect();

        let category_breakdown = IssueCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                self.category_counts
                    .get(&category)
                    .map(|count| CategoryBreakdownEntry {
                        category,
                        category_label: category.label(),
                        count: *count,
                        share: *count as f64 / self.total_reviews as f64,
                    })
            })
            .collect();

        CourseFeedbackSummary {
            course: self.course.clone(),
            total_reviews: self.total_reviews,
            average_rating: self.average_rating,
            show_stoppers: self.show_stoppers,
            severity_mix,
            category_breakdown,
            action_items: self
                .action_items
                .iter()
                .map(ActionItem::to_view)
                .collect(),
        }
    }
}
