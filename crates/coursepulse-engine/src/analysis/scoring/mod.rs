mod weights;

pub use weights::{InvalidWeightConfiguration, WeightVector};

use serde::{Deserialize, Serialize};

/// Five sub-scores in [0,100] attached to a recommendation by upstream
/// analysis. `effort` is a cost signal: higher means more expensive to fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub impact: f64,
    pub urgency: f64,
    pub effort: f64,
    pub strategic: f64,
    pub trend: f64,
}

/// Collapse five factor sub-scores into one 0-100 priority score.
///
/// `effort` enters the weighted mean inverted (`100 - effort`) so that
/// cheap fixes rank higher; there is no non-inverted mode. Dividing by the
/// weight sum keeps the result invariant to the scale the caller picked for
/// the weights.
pub fn priority_score(
    factors: &FactorScores,
    weights: &WeightVector,
) -> Result<u8, InvalidWeightConfiguration> {
    weights.validate()?;

    let effective_effort = (100.0 - factors.effort).clamp(0.0, 100.0);
    let weighted_sum = factors.impact * weights.impact
        + factors.urgency * weights.urgency
        + effective_effort * weights.effort
        + factors.strategic * weights.strategic
        + factors.trend * weights.trend;

    let raw = weighted_sum / weights.sum();
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}
