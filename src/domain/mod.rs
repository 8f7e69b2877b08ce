use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod parse;

pub use parse::parse_amount;

// ==================================================
// INPUT FIELDS
// ==================================================

/// Raw text of the four calculator inputs.
///
/// Values stay as entered so empty or partial entries survive; they are
/// parsed only when a result is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub balance: String,
    pub risk_amount: String,
    pub entry_price: String,
    pub stop_loss_price: String,
}

impl CalculatorInputs {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Balance => &self.balance,
            InputField::RiskAmount => &self.risk_amount,
            InputField::EntryPrice => &self.entry_price,
            InputField::StopLossPrice => &self.stop_loss_price,
        }
    }

    pub fn slot_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Balance => &mut self.balance,
            InputField::RiskAmount => &mut self.risk_amount,
            InputField::EntryPrice => &mut self.entry_price,
            InputField::StopLossPrice => &mut self.stop_loss_price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Balance,
    RiskAmount,
    EntryPrice,
    StopLossPrice,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::Balance,
        InputField::RiskAmount,
        InputField::EntryPrice,
        InputField::StopLossPrice,
    ];

    /// Store key for fields mirrored across sessions.
    /// Entry and stop loss are session-only.
    pub fn store_key(&self) -> Option<&'static str> {
        match self {
            InputField::Balance => Some("balance"),
            InputField::RiskAmount => Some("riskAmount"),
            InputField::EntryPrice | InputField::StopLossPrice => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::Balance => "Balance",
            InputField::RiskAmount => "Risk (1R)",
            InputField::EntryPrice => "Entry",
            InputField::StopLossPrice => "Stop Loss",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balance" | "bal" => Ok(InputField::Balance),
            "risk" | "riskamount" | "risk_amount" | "r" => Ok(InputField::RiskAmount),
            "entry" | "entryprice" | "entry_price" => Ok(InputField::EntryPrice),
            "stop" | "sl" | "stoploss" | "stop_loss" | "stoplossprice" | "stop_loss_price" => {
                Ok(InputField::StopLossPrice)
            }
            other => anyhow::bail!("Unknown field: {}", other),
        }
    }
}

// ==================================================
// RESULT
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionType {
    Long,
    Short,
}

impl PositionType {
    /// LONG when the stop sits below entry, SHORT otherwise.
    pub fn from_prices(entry: f64, stop_loss: f64) -> Self {
        if entry > stop_loss {
            PositionType::Long
        } else {
            PositionType::Short
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionType::Long => "LONG",
            PositionType::Short => "SHORT",
        }
    }
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub leverage: f64,
    pub rounded_leverage: f64,
    pub position_size: f64,
    pub risk_percent: f64,
    pub adjusted_balance: f64,
    pub adjusted_position_size: f64,
    pub position_type: PositionType,
}

impl CalculationResult {
    /// Whether the "suggestion for Nx" block applies, i.e. the exact
    /// leverage is not already a whole number.
    pub fn shows_adjustment(&self) -> bool {
        self.rounded_leverage != self.leverage.floor()
    }
}
