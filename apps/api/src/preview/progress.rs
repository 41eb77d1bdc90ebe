//! Progress tracking — maps form completion onto a percentage and a fixed
//! number of step indicators.

use serde::{Deserialize, Serialize};

use crate::models::fields::FORM_FIELDS;
use crate::models::form::FormState;

/// Completion indicator state returned with every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub filled_fields: usize,
    pub total_fields: usize,
    pub percentage: f64,
    /// Index of the highest active step indicator. Steps at or below this
    /// index should be shown active.
    pub active_step: usize,
    pub total_steps: usize,
}

/// Completion percentage in [0, 100]: filled fields over total tracked
/// fields. A field counts as filled when its trimmed value is non-empty.
pub fn compute_progress(state: &FormState, total_fields: usize) -> f64 {
    if total_fields == 0 {
        return 0.0;
    }
    let filled = state.filled_count().min(total_fields);
    filled as f64 / total_fields as f64 * 100.0
}

/// Step bucket containing `percentage`. The 0-100 range splits into
/// `total_steps` equal buckets; 100% lands on the last step.
pub fn active_step(percentage: f64, total_steps: usize) -> usize {
    if total_steps == 0 {
        return 0;
    }
    let threshold = 100.0 / total_steps as f64;
    ((percentage / threshold) as usize).min(total_steps - 1)
}

/// Full progress report over the registry's tracked fields.
pub fn progress_report(state: &FormState, total_steps: usize) -> ProgressReport {
    let total_fields = FORM_FIELDS.len();
    let percentage = compute_progress(state, total_fields);
    ProgressReport {
        filled_fields: state.filled_count(),
        total_fields,
        percentage,
        active_step: active_step(percentage, total_steps),
        total_steps,
    }
}
