use serde::{Deserialize, Serialize};

use super::aggregation::RoundingPolicy;
use crate::errors::CoreError;

/// Default pie chart palette; colours repeat every five lots.
pub const DEFAULT_PALETTE: [&str; 5] = ["#6366f1", "#10b981", "#f59e0b", "#ef4444", "#3b82f6"];

/// Display settings for summaries and charts.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Symbol printed in front of the total amount (e.g., "₹", "$")
    pub currency_symbol: String,

    /// How the average price is rounded for display
    pub rounding: RoundingPolicy,

    /// Pie slice colours, used in order and then repeated
    pub palette: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            rounding: RoundingPolicy::default(),
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.palette.is_empty() {
            return Err(CoreError::InvalidSettings(
                "palette must contain at least one colour".into(),
            ));
        }
        if self.palette.iter().any(|c| c.trim().is_empty()) {
            return Err(CoreError::InvalidSettings(
                "palette colours must not be blank".into(),
            ));
        }
        Ok(())
    }
}
