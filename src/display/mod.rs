use crate::domain::{CalculationResult, CalculatorInputs, InputField, PositionType};
use colored::*;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

const RULE: &str = "======================================================";

/// Two-decimal figure rounded from the exact binary value, halves away
/// from zero. `1.005` is stored just below the half and shows `1.00`.
/// Values outside the `Decimal` range fall back to float formatting.
pub fn two_dp(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", value),
    }
}

pub fn render_inputs(inputs: &CalculatorInputs) -> String {
    let mut out = String::new();

    for field in InputField::ALL {
        let value = inputs.get(field);
        let shown = if value.is_empty() {
            "—".dimmed().to_string()
        } else {
            value.to_string()
        };
        let _ = writeln!(out, "  {:<10} {}", field.label(), shown);
    }

    out
}

/// The results panel. With no result only the neutral `0x` placeholder
/// is shown.
pub fn render_result(result: Option<&CalculationResult>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);

    let Some(r) = result else {
        let _ = writeln!(out, "TARGET LEVERAGE");
        let _ = writeln!(out, "  {}", "0x".dimmed());
        let _ = writeln!(out, "{}", RULE);
        return out;
    };

    let badge = match r.position_type {
        PositionType::Long => r.position_type.as_str().cyan().bold(),
        PositionType::Short => r.position_type.as_str().red().bold(),
    };

    let _ = writeln!(out, "TARGET LEVERAGE  [{}]", badge);
    let _ = writeln!(out, "  {}", format!("{}x", r.rounded_leverage).cyan().bold());
    let _ = writeln!(out, "  Exact: {}x", two_dp(r.leverage));
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {:<20} ${}", "Position size", two_dp(r.position_size));
    let _ = writeln!(
        out,
        "  {:<20} {}",
        "Risk exposure",
        format!("{}%", two_dp(r.risk_percent)).red()
    );

    if r.shows_adjustment() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {}",
            format!("SUGGESTION FOR {}x", r.rounded_leverage).cyan().bold()
        );
        let _ = writeln!(
            out,
            "  {:<20} {}",
            "Adjusted Balance",
            format!("${}", two_dp(r.adjusted_balance)).cyan()
        );
        let _ = writeln!(
            out,
            "  {:<20} ${}",
            "Position Size",
            two_dp(r.adjusted_position_size)
        );
    }

    let _ = writeln!(out, "{}", RULE);
    out
}
