use crate::domain::{CalculationResult, InputField};
use log::{debug, info, warn};

pub fn log_restored(field: InputField, value: &str) {
    info!("♻️ Restored {} = {}", field, value);
}

pub fn log_persisted(field: InputField, value: &str) {
    debug!("💾 Saved {} = {}", field, value);
}

pub fn log_persist_failed(field: InputField, reason: &dyn std::fmt::Display) {
    warn!("⚠️ Could not save {} — {}", field, reason);
}

pub fn log_no_result(reason: &str) {
    debug!("∅ No result: {}", reason);
}

pub fn log_result(result: &CalculationResult) {
    debug!(
        "📐 {} {:.4}x (→ {}x), position ${:.2}, risk {:.2}%",
        result.position_type,
        result.leverage,
        result.rounded_leverage,
        result.position_size,
        result.risk_percent
    );
}
