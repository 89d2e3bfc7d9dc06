use std::io::Read;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::normalizer::normalize_course_code;
use super::{CourseId, FeedbackImportError, FeedbackRecord};

#[derive(Debug)]
pub(crate) struct ImportedReview {
    pub(crate) course: CourseId,
    pub(crate) record: FeedbackRecord,
}

pub(crate) fn parse_rows<R: Read>(
    reader: R,
) -> Result<Vec<ImportedReview>, FeedbackImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut reviews = Vec::new();

    for (index, result) in csv_reader.deserialize::<FeedbackRow>().enumerate() {
        let row = result?;
        // Row 1 is the header, so data rows start at line 2.
        let line = index as u64 + 2;

        let course = normalize_course_code(&row.course);
        if course.is_empty() {
            return Err(FeedbackImportError::MissingCourse { line });
        }

        if !(1..=5).contains(&row.rating) {
            return Err(FeedbackImportError::InvalidRating {
                line,
                value: row.rating,
            });
        }

        let is_show_stopper = row.is_show_stopper();
        let record = FeedbackRecord {
            positive_text: row.positive,
            improvement_text: row.improvement,
            show_stopper_text: row.show_stopper_text,
            is_show_stopper,
            rating: row.rating as u8,
            submitted_on: row.submitted_at.as_deref().and_then(parse_date),
        };

        reviews.push(ImportedReview {
            course: CourseId(course),
            record,
        });
    }

    Ok(reviews)
}

#[derive(Debug, Deserialize)]
struct FeedbackRow {
    #[serde(rename = "Course")]
    course: String,
    #[serde(rename = "Rating")]
    rating: i64,
    #[serde(
        rename = "Positive Feedback",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    positive: Option<String>,
    #[serde(
        rename = "Improvement Feedback",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    improvement: Option<String>,
    #[serde(
        rename = "Show Stopper Feedback",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    show_stopper_text: Option<String>,
    #[serde(
        rename = "Show Stopper",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    show_stopper: Option<String>,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
}

impl FeedbackRow {
    fn is_show_stopper(&self) -> bool {
        self.show_stopper
            .as_deref()
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "yes" | "true" | "1"
                )
            })
            .unwrap_or(false)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    debug!(value = trimmed, "skipping unparsable submission date");
    None
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
