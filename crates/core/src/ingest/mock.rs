//! Static fallback quotes, used whenever the spreadsheet fetch is not
//! configured or fails.

use crate::domain::quote::Quote;

pub fn mock_quotes() -> Vec<Quote> {
    fn quote(
        symbol: &str,
        name: &str,
        price: f64,
        change: f64,
        change_percent: f64,
        market_cap: f64,
        volume: u64,
    ) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            market_cap,
            volume,
        }
    }

    vec![
        quote("AAPL", "Apple Inc.", 172.62, 2.35, 1.38, 2_750_000_000_000.0, 58_432_100),
        quote("MSFT", "Microsoft Corp.", 337.20, 3.14, 0.94, 2_510_000_000_000.0, 23_145_600),
        quote("NVDA", "NVIDIA Corp.", 437.53, 15.32, 3.63, 1_080_000_000_000.0, 42_367_800),
        quote("AMZN", "Amazon.com Inc.", 130.25, -0.43, -0.33, 1_340_000_000_000.0, 35_721_900),
        quote("GOOGL", "Alphabet Inc.", 125.30, 1.25, 1.01, 1_580_000_000_000.0, 19_876_500),
        quote("META", "Meta Platforms Inc.", 297.48, 4.23, 1.44, 763_000_000_000.0, 21_345_600),
        quote("TSLA", "Tesla Inc.", 243.84, -5.62, -2.25, 774_000_000_000.0, 32_156_700),
        quote("JPM", "JPMorgan Chase & Co.", 138.24, 0.87, 0.63, 403_000_000_000.0, 8_765_400),
        quote("V", "Visa Inc.", 235.45, 1.23, 0.53, 485_000_000_000.0, 6_543_200),
        quote("WMT", "Walmart Inc.", 155.32, 2.15, 1.40, 418_000_000_000.0, 7_654_300),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_list_is_stable() {
        let quotes = mock_quotes();
        assert_eq!(quotes.len(), 10);
        assert_eq!(quotes[0].symbol, "AAPL");
        assert_eq!(quotes[0].price, 172.62);
        assert_eq!(mock_quotes(), quotes);
    }
}
