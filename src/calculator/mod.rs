use crate::domain::*;
use crate::logging::{log_no_result, log_persist_failed, log_persisted, log_restored, log_result};
use crate::store::{KeyValueStore, NullStore};

/// Seed values of the demo form.
pub const DEMO_INPUTS: [(InputField, &str); 4] = [
    (InputField::Balance, "20"),
    (InputField::RiskAmount, "1"),
    (InputField::EntryPrice, "2"),
    (InputField::StopLossPrice, "1"),
];

/// Leverage and position size for the given inputs.
///
/// ```text
/// price_diff_pct = |entry - stop_loss| / entry
/// position_size  = risk / price_diff_pct
/// leverage       = position_size / balance
/// ```
///
/// Returns `None` when any input is missing, zero or non-numeric, when
/// entry equals stop loss, or when the derived figures are not finite.
pub fn calculate(inputs: &CalculatorInputs) -> Option<CalculationResult> {
    let balance = parse_amount(&inputs.balance);
    let risk = parse_amount(&inputs.risk_amount);
    let entry = parse_amount(&inputs.entry_price);
    let stop_loss = parse_amount(&inputs.stop_loss_price);

    let (Some(balance), Some(risk), Some(entry), Some(stop_loss)) =
        (balance, risk, entry, stop_loss)
    else {
        log_no_result("missing, zero or non-numeric input");
        return None;
    };

    if entry == stop_loss {
        log_no_result("entry equals stop loss");
        return None;
    }

    let price_diff = (entry - stop_loss).abs();
    let price_diff_percent = price_diff / entry;

    let position_size = risk / price_diff_percent;
    let leverage = position_size / balance;

    if !leverage.is_finite() || !position_size.is_finite() {
        log_no_result("leverage or position size not finite");
        return None;
    }

    let rounded_leverage = leverage.ceil();
    let adjusted_balance = position_size / rounded_leverage;
    let adjusted_position_size = adjusted_balance * rounded_leverage;

    let result = CalculationResult {
        leverage,
        rounded_leverage,
        position_size,
        risk_percent: (risk / balance) * 100.0,
        adjusted_balance,
        adjusted_position_size,
        position_type: PositionType::from_prices(entry, stop_loss),
    };

    log_result(&result);
    Some(result)
}

// ==================================================
// STATEFUL FORM
// ==================================================

/// The calculator form: four raw inputs, the derived result, and the store
/// that mirrors balance and risk across sessions.
///
/// Every mutation recomputes the result before returning.
pub struct LeverageCalculator<S: KeyValueStore> {
    inputs: CalculatorInputs,
    result: Option<CalculationResult>,
    store: S,
}

impl<S: KeyValueStore> LeverageCalculator<S> {
    /// Restore persisted fields from `store`; everything else starts blank.
    pub fn new(store: S) -> Self {
        let mut inputs = CalculatorInputs::default();

        for field in InputField::ALL {
            let Some(key) = field.store_key() else {
                continue;
            };
            if let Some(value) = store.get(key) {
                log_restored(field, &value);
                *inputs.slot_mut(field) = value;
            }
        }

        let result = calculate(&inputs);

        Self {
            inputs,
            result,
            store,
        }
    }

    /// Replace one input, mirror it to the store if it is a persisted field
    /// and non-empty, then recompute.
    pub fn set(&mut self, field: InputField, value: impl Into<String>) -> Option<&CalculationResult> {
        let value = value.into();

        if let Some(key) = field.store_key() {
            if !value.is_empty() {
                match self.store.set(key, &value) {
                    Ok(()) => log_persisted(field, &value),
                    Err(e) => log_persist_failed(field, &e),
                }
            }
        }

        *self.inputs.slot_mut(field) = value;
        self.recompute()
    }

    pub fn clear(&mut self, field: InputField) -> Option<&CalculationResult> {
        self.set(field, String::new())
    }

    fn recompute(&mut self) -> Option<&CalculationResult> {
        self.result = calculate(&self.inputs);
        self.result.as_ref()
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn value(&self, field: InputField) -> &str {
        self.inputs.get(field)
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl LeverageCalculator<NullStore> {
    /// The demo form: fixed seed values, no persistence at all.
    pub fn demo() -> Self {
        let mut inputs = CalculatorInputs::default();
        for (field, value) in DEMO_INPUTS {
            *inputs.slot_mut(field) = value.to_string();
        }

        let result = calculate(&inputs);

        Self {
            inputs,
            result,
            store: NullStore,
        }
    }
}
