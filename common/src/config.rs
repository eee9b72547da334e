//! Settings read from the host page.
//!
//! The page may embed a JSON object; every key is optional and falls back to
//! the defaults below, so `{}` and a missing block behave the same.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::import::{ImportPolicy, Schema};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid raffle configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("wheel needs at least one full turn per spin")]
    NoTurns,
}

/// The three flavours of the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Three columns, winners stay on the wheel, nothing is logged.
    Classic,
    /// Five columns with department, winners stay, incomplete rows are dropped.
    Department,
    /// Three columns, winners leave the wheel and are logged for export.
    #[default]
    Elimination,
}

impl Variant {
    pub fn schema(self) -> Schema {
        match self {
            Variant::Department => Schema::Department,
            Variant::Classic | Variant::Elimination => Schema::Basic,
        }
    }

    pub fn import_policy(self) -> ImportPolicy {
        match self {
            Variant::Department => ImportPolicy::SkipInvalid,
            Variant::Classic | Variant::Elimination => ImportPolicy::Strict,
        }
    }

    pub fn removes_winner(self) -> bool {
        matches!(self, Variant::Elimination)
    }

    pub fn records_results(self) -> bool {
        matches!(self, Variant::Elimination)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Diameter in CSS pixels.
    pub size: u32,
    pub spin_duration_ms: u32,
    /// Full turns before the wheel settles.
    pub turns: u32,
    pub primary_color: String,
    pub contrast_color: String,
    pub button_text: String,
    pub font_family: String,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: 290,
            spin_duration_ms: 4000,
            turns: 5,
            primary_color: "black".to_string(),
            contrast_color: "white".to_string(),
            button_text: "หมุน".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaffleConfig {
    pub variant: Variant,
    pub wheel: WheelConfig,
    /// How long confetti keeps falling after a winner is announced.
    pub confetti_ms: u32,
    pub export_file_name: String,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            wheel: WheelConfig::default(),
            confetti_ms: 10_000,
            export_file_name: "spin_results.csv".to_string(),
        }
    }
}

impl RaffleConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: RaffleConfig = serde_json::from_str(text)?;
        if config.wheel.turns == 0 {
            return Err(ConfigError::NoTurns);
        }
        Ok(config)
    }
}
