use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;

use super::super::feedback::CourseId;
use super::super::scoring::{priority_score, InvalidWeightConfiguration, WeightVector};
use super::domain::{Recommendation, RecommendationDraft, RecommendationId, RecommendationStatus};

/// In-memory recommendation store with single-writer discipline.
///
/// `recompute` and the lifecycle transitions share one mutex, so a score
/// batch and a validation can never interleave over the same records. The
/// collection preserves insertion order, which doubles as the ranking
/// tie-break.
pub struct RecommendationRegistry {
    records: Mutex<Vec<Recommendation>>,
    recompute_active: AtomicBool,
    sequence: AtomicU64,
}

impl Default for RecommendationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationRegistry {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            recompute_active: AtomicBool::new(false),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> RecommendationId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        RecommendationId(format!("rec-{id:06}"))
    }

    /// Register a new recommendation, scoring it once with the supplied
    /// weights. It enters the lifecycle as pending.
    pub fn insert(
        &self,
        draft: RecommendationDraft,
        weights: &WeightVector,
    ) -> Result<Recommendation, InvalidWeightConfiguration> {
        let score = priority_score(&draft.factors, weights)?;
        let record = Recommendation {
            id: self.next_id(),
            course: draft.course,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            factors: draft.factors,
            priority_score: score,
            is_show_stopper: draft.is_show_stopper,
            status: RecommendationStatus::Pending,
            validator: None,
            validation_notes: None,
            validated_on: None,
        };

        let mut records = self.records.lock().expect("recommendation mutex poisoned");
        records.push(record.clone());
        Ok(record)
    }

    pub fn get(&self, id: &RecommendationId) -> Option<Recommendation> {
        let records = self.records.lock().expect("recommendation mutex poisoned");
        records.iter().find(|record| &record.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("recommendation mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-score every recommendation with one weight vector as a single
    /// all-or-nothing batch. Scores are computed into a scratch vector
    /// before any record is written, so an invalid weight configuration
    /// leaves every prior score untouched. A second call while one batch is
    /// in flight is rejected, never interleaved.
    pub fn recompute(&self, weights: &WeightVector) -> Result<usize, RecomputeError> {
        if self
            .recompute_active
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(RecomputeError::RecomputeInProgress);
        }
        let _gate = RecomputeGate(&self.recompute_active);

        let mut records = self.records.lock().expect("recommendation mutex poisoned");

        let mut scores = Vec::with_capacity(records.len());
        for record in records.iter() {
            scores.push(priority_score(&record.factors, weights)?);
        }

        for (record, score) in records.iter_mut().zip(scores) {
            record.priority_score = score;
        }

        Ok(records.len())
    }

    /// Mark a pending recommendation validated. Notes must be non-empty
    /// after trimming; anything already past pending is rejected, including
    /// a repeat validation (no silent overwrite of the earlier verdict).
    pub fn validate(
        &self,
        id: &RecommendationId,
        notes: &str,
        validator: &str,
        validated_on: NaiveDate,
    ) -> Result<Recommendation, ValidationError> {
        let trimmed = notes.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyNotes);
        }

        let mut records = self.records.lock().expect("recommendation mutex poisoned");
        let record = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| ValidationError::UnknownRecommendation(id.clone()))?;

        if record.status != RecommendationStatus::Pending {
            return Err(ValidationError::InvalidStateTransition {
                from: record.status,
            });
        }

        record.status = RecommendationStatus::Validated;
        record.validator = Some(validator.to_string());
        record.validation_notes = Some(trimmed.to_string());
        record.validated_on = Some(validated_on);
        Ok(record.clone())
    }

    /// Move a validated recommendation into active work.
    pub fn start_progress(&self, id: &RecommendationId) -> Result<Recommendation, ValidationError> {
        self.transition(
            id,
            RecommendationStatus::Validated,
            RecommendationStatus::InProgress,
        )
    }

    /// Close out a recommendation that was being worked.
    pub fn resolve(&self, id: &RecommendationId) -> Result<Recommendation, ValidationError> {
        self.transition(
            id,
            RecommendationStatus::InProgress,
            RecommendationStatus::Resolved,
        )
    }

    /// Discard a pending recommendation without validating it.
    pub fn dismiss(&self, id: &RecommendationId) -> Result<Recommendation, ValidationError> {
        self.transition(
            id,
            RecommendationStatus::Pending,
            RecommendationStatus::Dismissed,
        )
    }

    fn transition(
        &self,
        id: &RecommendationId,
        expected: RecommendationStatus,
        next: RecommendationStatus,
    ) -> Result<Recommendation, ValidationError> {
        let mut records = self.records.lock().expect("recommendation mutex poisoned");
        let record = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| ValidationError::UnknownRecommendation(id.clone()))?;

        if record.status != expected {
            return Err(ValidationError::InvalidStateTransition {
                from: record.status,
            });
        }

        record.status = next;
        Ok(record.clone())
    }

    /// Presentation ordering: show-stoppers before everything else, then
    /// descending priority score; ties keep insertion order.
    pub fn ranked(&self) -> Vec<Recommendation> {
        let records = self.records.lock().expect("recommendation mutex poisoned");
        rank(records.clone())
    }

    pub fn ranked_for_course(&self, course: &CourseId) -> Vec<Recommendation> {
        let records = self.records.lock().expect("recommendation mutex poisoned");
        let filtered = records
            .iter()
            .filter(|record| &record.course == course)
            .cloned()
            .collect();
        rank(filtered)
    }

    #[cfg(test)]
    pub(crate) fn engage_recompute_gate_for_tests(&self) -> bool {
        self.recompute_active
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    #[cfg(test)]
    pub(crate) fn release_recompute_gate_for_tests(&self) {
        self.recompute_active.store(false, Ordering::Release);
    }
}

fn rank(mut records: Vec<Recommendation>) -> Vec<Recommendation> {
    records.sort_by(|a, b| {
        b.is_show_stopper
            .cmp(&a.is_show_stopper)
            .then(b.priority_score.cmp(&a.priority_score))
    });
    records
}

struct RecomputeGate<'a>(&'a AtomicBool);

impl Drop for RecomputeGate<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Failures for score recomputation batches.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecomputeError {
    #[error(transparent)]
    InvalidWeights(#[from] InvalidWeightConfiguration),
    #[error("a recompute batch is already in flight")]
    RecomputeInProgress,
}

/// Failures for lifecycle state transitions.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("validation notes must not be empty")]
    EmptyNotes,
    #[error("recommendation '{0}' is not tracked")]
    UnknownRecommendation(RecommendationId),
    #[error("transition not allowed from status '{}'", .from.label())]
    InvalidStateTransition { from: RecommendationStatus },
}
