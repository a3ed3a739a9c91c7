//! Google Sheets values API client. Reads the STOCKS tab into `Quote` rows.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::Settings;
use crate::domain::quote::Quote;
use crate::ingest::provider::QuoteProvider;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

// Column layout of the STOCKS tab (A:G):
// A symbol, B name, C..D unused, E price, F change, G change %.
const COL_SYMBOL: usize = 0;
const COL_NAME: usize = 1;
const COL_PRICE: usize = 4;
const COL_CHANGE: usize = 5;
const COL_CHANGE_PERCENT: usize = 6;

#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    sheet_id: String,
    api_key: String,
    range: String,
}

impl GoogleSheetsClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let sheet_id = settings.require_google_sheet_id()?.to_string();
        let api_key = settings.require_google_sheets_api_key()?.to_string();
        let range = settings.sheet_range().to_string();

        let timeout_secs = std::env::var("SHEETS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build sheets http client")?;

        Ok(Self {
            http,
            sheet_id,
            api_key,
            range,
        })
    }

    fn url(&self) -> String {
        format!("{SHEETS_BASE_URL}/{}/values/{}", self.sheet_id, self.range)
    }
}

#[async_trait::async_trait]
impl QuoteProvider for GoogleSheetsClient {
    fn provider_name(&self) -> &'static str {
        "google_sheets"
    }

    async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let res = self
            .http
            .get(self.url())
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .context("sheets request failed")?;

        let status = res.status();
        anyhow::ensure!(status.is_success(), "sheets HTTP {status}");

        let body: ValuesResponse = res
            .json()
            .await
            .context("failed to parse sheets response")?;

        Ok(rows_to_quotes(body.values))
    }
}

/// Skips the header row, drops rows with a blank symbol column, maps fixed
/// column indices to fields. Unparsable numerics become 0, matching the
/// sheet's occasional formula-error cells.
fn rows_to_quotes(values: Vec<Vec<String>>) -> Vec<Quote> {
    values
        .into_iter()
        .skip(1)
        .filter(|row| {
            row.get(COL_SYMBOL)
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false)
        })
        .map(|row| Quote {
            symbol: cell(&row, COL_SYMBOL),
            name: cell(&row, COL_NAME),
            price: numeric_cell(&row, COL_PRICE),
            change: numeric_cell(&row, COL_CHANGE),
            change_percent: numeric_cell(&row, COL_CHANGE_PERCENT),
            // Not tracked in the sheet.
            market_cap: 0.0,
            volume: 0,
        })
        .collect()
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).map(|s| s.trim().to_string()).unwrap_or_default()
}

fn numeric_cell(row: &[String], idx: usize) -> f64 {
    row.get(idx)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn skips_header_and_blank_symbol_rows() {
        let values = vec![
            row(&["SYMBOL", "NAME", "", "", "CURRENT PRICE", "CHANGE", "CHANGE %"]),
            row(&["AAPL", "Apple Inc.", "", "", "172.62", "2.35", "1.38"]),
            row(&["", "orphan row", "", "", "1.0", "1.0", "1.0"]),
            row(&["  ", "whitespace row", "", "", "1.0", "1.0", "1.0"]),
            row(&["MSFT", "Microsoft Corp.", "", "", "337.20", "3.14", "0.94"]),
        ];

        let quotes = rows_to_quotes(values);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "AAPL");
        assert_eq!(quotes[0].price, 172.62);
        assert_eq!(quotes[1].symbol, "MSFT");
        assert_eq!(quotes[1].change_percent, 0.94);
    }

    #[test]
    fn unparsable_numerics_become_zero() {
        let values = vec![
            row(&["SYMBOL", "NAME"]),
            row(&["NVDA", "NVIDIA Corp.", "", "", "#REF!", "", "3.63"]),
        ];

        let quotes = rows_to_quotes(values);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].price, 0.0);
        assert_eq!(quotes[0].change, 0.0);
        assert_eq!(quotes[0].change_percent, 3.63);
        assert_eq!(quotes[0].market_cap, 0.0);
        assert_eq!(quotes[0].volume, 0);
    }

    #[test]
    fn short_rows_are_padded_with_defaults() {
        let values = vec![row(&["SYMBOL"]), row(&["TSLA"])];
        let quotes = rows_to_quotes(values);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "TSLA");
        assert_eq!(quotes[0].name, "");
        assert_eq!(quotes[0].price, 0.0);
    }

    #[test]
    fn empty_values_yield_empty_watchlist() {
        assert!(rows_to_quotes(Vec::new()).is_empty());
        let parsed: ValuesResponse = serde_json::from_str("{}").unwrap();
        assert!(rows_to_quotes(parsed.values).is_empty());
    }
}
