pub mod domain;
pub mod format;
pub mod ingest;
pub mod momentum;
pub mod seed;
pub mod sentiment;
pub mod sort;
pub mod universe;

pub mod config {
    use anyhow::Context;

    pub const DEFAULT_SHEET_RANGE: &str = "STOCKS!A:G";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub google_sheet_id: Option<String>,
        pub google_sheets_api_key: Option<String>,
        pub google_sheets_range: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                google_sheet_id: std::env::var("GOOGLE_SHEET_ID").ok(),
                google_sheets_api_key: std::env::var("GOOGLE_SHEETS_API_KEY").ok(),
                google_sheets_range: std::env::var("GOOGLE_SHEETS_RANGE").ok(),
            })
        }

        /// True when both spreadsheet credentials are present; the watchlist
        /// fetch degrades to mock data otherwise.
        pub fn sheets_configured(&self) -> bool {
            self.google_sheet_id.is_some() && self.google_sheets_api_key.is_some()
        }

        pub fn require_google_sheet_id(&self) -> anyhow::Result<&str> {
            self.google_sheet_id
                .as_deref()
                .context("GOOGLE_SHEET_ID is required")
        }

        pub fn require_google_sheets_api_key(&self) -> anyhow::Result<&str> {
            self.google_sheets_api_key
                .as_deref()
                .context("GOOGLE_SHEETS_API_KEY is required")
        }

        pub fn sheet_range(&self) -> &str {
            self.google_sheets_range
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_SHEET_RANGE)
        }
    }
}
