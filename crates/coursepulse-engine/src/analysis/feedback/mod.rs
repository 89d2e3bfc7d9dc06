pub(crate) mod normalizer;
mod parser;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Identifier wrapper for course subjects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    /// Build an id from a raw export value, applying the same normalization
    /// the importer uses so filters and imported data always agree.
    pub fn normalized(raw: &str) -> Self {
        Self(normalizer::normalize_course_code(raw))
    }
}

/// One learner review as supplied by the upstream export. Consumed per
/// classification call; the engine never owns or mutates review history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub positive_text: Option<String>,
    pub improvement_text: Option<String>,
    pub show_stopper_text: Option<String>,
    pub is_show_stopper: bool,
    pub rating: u8,
    pub submitted_on: Option<NaiveDate>,
}

/// All reviews imported for one course, in export order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFeedback {
    pub course: CourseId,
    pub records: Vec<FeedbackRecord>,
}

/// Import failures. Ratings outside 1-5 and missing course codes abort the
/// import with the offending line; unparsable dates are merely skipped.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackImportError {
    #[error("failed to read feedback export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid feedback CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {line}: rating {value} is outside 1-5")]
    InvalidRating { line: u64, value: i64 },
    #[error("row {line}: course code is missing")]
    MissingCourse { line: u64 },
}

/// Reads feedback CSV exports and groups them per course.
pub struct FeedbackCsvImporter;

impl FeedbackCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CourseFeedback>, FeedbackImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CourseFeedback>, FeedbackImportError> {
        let mut order: Vec<CourseId> = Vec::new();
        let mut grouped: HashMap<CourseId, Vec<FeedbackRecord>> = HashMap::new();

        for review in parser::parse_rows(reader)? {
            let bucket = grouped.entry(review.course.clone()).or_insert_with(|| {
                order.push(review.course.clone());
                Vec::new()
            });
            bucket.push(review.record);
        }

        let mut collected = Vec::with_capacity(order.len());
        for course in order {
            let records = grouped.remove(&course).unwrap_or_default();
            collected.push(CourseFeedback { course, records });
        }

        info!(courses = collected.len(), "imported feedback export");
        Ok(collected)
    }
}
