//! Coursepulse engine: priority scoring and issue classification for course
//! feedback.
//!
//! The engine is computation-only. Callers feed it feedback records, factor
//! sub-scores, and weight vectors; they read back ranked recommendations,
//! categorized action items, and report summaries. Transport, persistence,
//! and presentation belong to the callers.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
