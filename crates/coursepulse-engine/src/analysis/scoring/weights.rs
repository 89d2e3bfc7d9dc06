use serde::{Deserialize, Serialize};

/// Relative importance of the five quality signals feeding a priority score.
///
/// Magnitudes are caller-chosen: 1-5 sliders and 0-1 fractions are equally
/// valid because scoring divides by the sum, so only proportions matter.
/// Vectors are replaced wholesale; there is no partial-mutation API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub impact: f64,
    pub urgency: f64,
    pub effort: f64,
    pub strategic: f64,
    pub trend: f64,
}

impl WeightVector {
    pub fn sum(&self) -> f64 {
        self.impact + self.urgency + self.effort + self.strategic + self.trend
    }

    /// Check the vector is usable for scoring: every weight finite and
    /// non-negative, at least one positive. Magnitudes are never altered
    /// here; the divide-by-sum happens per scoring call.
    pub fn validate(&self) -> Result<(), InvalidWeightConfiguration> {
        for (factor, value) in self.fields() {
            if !value.is_finite() {
                return Err(InvalidWeightConfiguration::NotFinite { factor });
            }
            if value < 0.0 {
                return Err(InvalidWeightConfiguration::Negative { factor });
            }
        }

        if self.sum() == 0.0 {
            return Err(InvalidWeightConfiguration::ZeroSum);
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("impact", self.impact),
            ("urgency", self.urgency),
            ("effort", self.effort),
            ("strategic", self.strategic),
            ("trend", self.trend),
        ]
    }
}

impl Default for WeightVector {
    /// Rubric used when no weight configuration is supplied.
    fn default() -> Self {
        Self {
            impact: 5.0,
            urgency: 4.0,
            effort: 3.0,
            strategic: 2.0,
            trend: 1.0,
        }
    }
}

/// Rejection reasons for a malformed weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWeightConfiguration {
    #[error("weight '{factor}' must be a finite number")]
    NotFinite { factor: &'static str },
    #[error("weight '{factor}' must not be negative")]
    Negative { factor: &'static str },
    #[error("at least one weight must be positive")]
    ZeroSum,
}
