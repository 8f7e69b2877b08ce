use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/* =======================
CLI ARGS
======================= */

#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Account balance
    #[arg(short, long)]
    pub balance: Option<String>,

    /// Amount risked on the trade (1R)
    #[arg(short, long)]
    pub risk: Option<String>,

    /// Entry price
    #[arg(short, long)]
    pub entry: Option<String>,

    /// Stop loss price
    #[arg(short, long = "stop-loss")]
    pub stop_loss: Option<String>,

    /// Start from the demo values (20 / 1 / 2 / 1) without persistence
    #[arg(long)]
    pub demo: bool,

    /// Print the result as JSON instead of the panel
    #[arg(long)]
    pub json: bool,

    /// Do not read or write saved balance / risk
    #[arg(long)]
    pub no_persist: bool,
}

impl Args {
    /// True when any of the four values was passed on the command line.
    pub fn has_values(&self) -> bool {
        self.balance.is_some()
            || self.risk.is_some()
            || self.entry.is_some()
            || self.stop_loss.is_some()
    }
}

/* =======================
MAIN CONFIG
======================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

/* =======================
STORAGE CONFIG
======================= */

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Remember balance and risk between runs
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

fn default_enabled() -> bool {
    true
}

fn default_state_path() -> PathBuf {
    PathBuf::from("calculator_state.json")
}

/* =======================
DEFAULT CONFIG
======================= */

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_state_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

/* =======================
LOAD / CREATE CONFIG
======================= */

impl Config {
    pub fn load(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let cfg = Config::default();
            let content = serde_json::to_string_pretty(&cfg)?;
            std::fs::write(path, content)?;
            Ok(cfg)
        }
    }

    /// State file location, `LEVERAGE_STATE_FILE` taking precedence.
    pub fn state_path(&self) -> PathBuf {
        std::env::var("LEVERAGE_STATE_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.storage.path.clone())
    }
}
