use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Which text field of a lot is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotField {
    /// Buy price per share
    Price,
    /// Number of shares bought
    Quantity,
}

impl std::fmt::Display for LotField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotField::Price => write!(f, "price"),
            LotField::Quantity => write!(f, "quantity"),
        }
    }
}

impl std::str::FromStr for LotField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(LotField::Price),
            "quantity" | "qty" => Ok(LotField::Quantity),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

/// A single purchase lot as entered by the user.
///
/// Both fields hold raw, unvalidated text. Conversion to numbers happens
/// only when the ledger is aggregated, where anything unparseable counts
/// as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLot {
    /// Buy price, as typed (may be empty)
    #[serde(default)]
    pub price: String,

    /// Quantity, as typed (may be empty)
    #[serde(default)]
    pub quantity: String,
}

impl PurchaseLot {
    pub fn new(price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// A lot with both fields blank, as added by "add new purchase".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw text of the given field.
    #[must_use]
    pub fn field(&self, field: LotField) -> &str {
        match field {
            LotField::Price => &self.price,
            LotField::Quantity => &self.quantity,
        }
    }

    pub fn set_field(&mut self, field: LotField, value: impl Into<String>) {
        match field {
            LotField::Price => self.price = value.into(),
            LotField::Quantity => self.quantity = value.into(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.price.is_empty() && self.quantity.is_empty()
    }
}
