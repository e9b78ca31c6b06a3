use crate::errors::CoreError;
use crate::models::ledger::{PurchaseLedger, MIN_LOTS};
use crate::models::lot::{LotField, PurchaseLot};

/// Edits the purchase ledger: append, update, remove, reset.
///
/// Pure business logic, no I/O. Upholds the two-lot floor: the first
/// [`MIN_LOTS`] lots can be edited but never removed.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Add an empty lot at the end. Returns the index of the new lot.
    pub fn append(&self, ledger: &mut PurchaseLedger) -> usize {
        ledger.entries.push(PurchaseLot::empty());
        ledger.entries.len() - 1
    }

    /// Store raw text into one field of the lot at `index`.
    /// The text is kept as-is; it is only interpreted when aggregating.
    pub fn update(
        &self,
        ledger: &mut PurchaseLedger,
        index: usize,
        field: LotField,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let len = ledger.entries.len();
        let lot = ledger
            .entries
            .get_mut(index)
            .ok_or(CoreError::LotIndexOutOfBounds { index, len })?;
        lot.set_field(field, value);
        Ok(())
    }

    /// Remove the lot at `index`.
    ///
    /// Indices below [`MIN_LOTS`] and indices past the end are silently
    /// ignored. Returns `true` when a lot was actually removed; the relative
    /// order of the remaining lots is preserved.
    pub fn remove(&self, ledger: &mut PurchaseLedger, index: usize) -> bool {
        if index < MIN_LOTS || index >= ledger.entries.len() {
            return false;
        }
        ledger.entries.remove(index);
        true
    }

    /// Discard every lot and start again with two empty ones.
    pub fn reset(&self, ledger: &mut PurchaseLedger) {
        *ledger = PurchaseLedger::default();
    }

    /// Form heading for the lot at `index`.
    #[must_use]
    pub fn slot_title(&self, index: usize) -> String {
        match index {
            0 => "First Purchase".to_string(),
            1 => "Second Purchase".to_string(),
            n => format!("Purchase {}", n + 1),
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
