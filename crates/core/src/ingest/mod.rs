//! Watchlist quote ingest. One optional spreadsheet fetch per page load;
//! every failure path falls back to the static mock list.

pub mod mock;
pub mod provider;
pub mod sheets;

use crate::config::Settings;
use crate::domain::quote::Quote;
use provider::QuoteProvider;
use sheets::GoogleSheetsClient;

/// Fetches the watchlist, degrading to mock data when the spreadsheet is not
/// configured or the fetch fails for any reason (network, non-2xx, parse).
/// Infallible by construction: the caller always gets a list.
pub async fn fetch_watchlist(settings: &Settings) -> Vec<Quote> {
    if !settings.sheets_configured() {
        tracing::warn!("Google Sheets credentials not configured; using mock data");
        return mock::mock_quotes();
    }

    let client = match GoogleSheetsClient::from_settings(settings) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "failed to build sheets client; using mock data");
            return mock::mock_quotes();
        }
    };

    match client.fetch_quotes().await {
        Ok(quotes) => {
            tracing::info!(provider = client.provider_name(), rows = quotes.len(), "watchlist fetched");
            quotes
        }
        Err(err) => {
            tracing::error!(error = %err, "sheets fetch failed; using mock data");
            mock::mock_quotes()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_fall_back_to_mock() {
        let settings = Settings {
            google_sheet_id: None,
            google_sheets_api_key: None,
            google_sheets_range: None,
        };
        let quotes = fetch_watchlist(&settings).await;
        assert_eq!(quotes, mock::mock_quotes());
    }

    #[tokio::test]
    async fn partial_credentials_fall_back_to_mock() {
        let settings = Settings {
            google_sheet_id: Some("sheet-id".to_string()),
            google_sheets_api_key: None,
            google_sheets_range: None,
        };
        let quotes = fetch_watchlist(&settings).await;
        assert_eq!(quotes, mock::mock_quotes());
    }
}
