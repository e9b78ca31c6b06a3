use serde::{Deserialize, Serialize};

use super::lot::PurchaseLot;

/// Number of leading lots that can never be removed.
pub const MIN_LOTS: usize = 2;

/// The ordered collection of lots currently entered.
///
/// Insertion order is display order and charting order. A ledger always
/// holds at least [`MIN_LOTS`] lots; `LedgerService` is the only thing
/// that mutates it and it upholds that floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseLedger {
    pub entries: Vec<PurchaseLot>,
}

impl Default for PurchaseLedger {
    fn default() -> Self {
        Self {
            entries: vec![PurchaseLot::empty(); MIN_LOTS],
        }
    }
}

impl PurchaseLedger {
    /// Build a ledger from existing lots, padding with empty lots up to the floor.
    pub fn from_lots(lots: Vec<PurchaseLot>) -> Self {
        let mut entries = lots;
        while entries.len() < MIN_LOTS {
            entries.push(PurchaseLot::empty());
        }
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a ledger built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PurchaseLot> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PurchaseLot> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PurchaseLedger {
    type Item = &'a PurchaseLot;
    type IntoIter = std::slice::Iter<'a, PurchaseLot>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
