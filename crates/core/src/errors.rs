use thiserror::Error;

/// Unified error type for the entire share-average-core library.
///
/// The computation itself never fails: bad numbers coerce to zero and
/// removals below the two-lot floor are ignored. Errors only come from
/// the edges (out-of-range edits, snapshots, settings, files).
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Ledger ──────────────────────────────────────────────────────
    #[error("Lot index {index} is out of bounds (ledger has {len} lots)")]
    LotIndexOutOfBounds { index: usize, len: usize },

    #[error("Unknown lot field '{0}' (expected 'price' or 'quantity')")]
    UnknownField(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Snapshots / File ────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
