//! Recommendation lifecycle: an in-memory registry that scores drafts,
//! recomputes priority batches, and walks records through validation.

pub mod domain;
mod registry;

#[cfg(test)]
mod tests;

pub use domain::{Recommendation, RecommendationDraft, RecommendationId, RecommendationStatus};
pub use registry::{RecommendationRegistry, RecomputeError, ValidationError};
