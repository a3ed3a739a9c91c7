use serde::{Deserialize, Serialize};

/// A watchlist quote row. This is the one canonical quote shape: the sheet
/// ingest, the mock fallback and the renderer all speak this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Not present in the spreadsheet columns; 0 for sheet-backed rows.
    pub market_cap: f64,
    /// Not present in the spreadsheet columns; 0 for sheet-backed rows.
    pub volume: u64,
}
