pub mod calculator;
pub mod command;
pub mod config;
pub mod display;
pub mod domain;
pub mod logging;
pub mod store;

pub use calculator::{calculate, LeverageCalculator};
pub use domain::{CalculationResult, CalculatorInputs, InputField, PositionType};
