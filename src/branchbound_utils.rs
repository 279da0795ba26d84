use std::time::{SystemTime, UNIX_EPOCH};

/// Distance from `value` to the nearest integer
pub fn fractionality(value: f64) -> f64 {
    (value - value.round()).abs()
}

/// True if `value` is within an absolute `tolerance` of an integer
pub fn is_near_integer(value: f64, tolerance: f64) -> bool {
    fractionality(value) <= tolerance
}

/// Wall clock in seconds, used for the time limit and the solver output
pub fn get_current_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}
