//! Explicit table sorting. Each dashboard exposes a closed set of sortable
//! columns as an enum mapped to a typed comparator, instead of indexing
//! records by a dynamic field name.

use std::cmp::Ordering;

use crate::domain::momentum::MomentumRecord;
use crate::domain::quote::Quote;
use crate::domain::sentiment::SentimentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MomentumSortKey {
    #[default]
    Rank,
    Symbol,
    Price,
    ChangePercent,
    Mom21,
    Mom42,
    Mom63,
    Score,
    Rsi,
    Grade,
}

impl MomentumSortKey {
    fn compare(self, a: &MomentumRecord, b: &MomentumRecord) -> Ordering {
        match self {
            MomentumSortKey::Rank => a.momentum_rank.cmp(&b.momentum_rank),
            MomentumSortKey::Symbol => a.symbol.cmp(&b.symbol),
            MomentumSortKey::Price => cmp_f64(a.price, b.price),
            MomentumSortKey::ChangePercent => cmp_f64(a.change_percent, b.change_percent),
            MomentumSortKey::Mom21 => cmp_f64(a.mom21, b.mom21),
            MomentumSortKey::Mom42 => cmp_f64(a.mom42, b.mom42),
            MomentumSortKey::Mom63 => cmp_f64(a.mom63, b.mom63),
            MomentumSortKey::Score => cmp_f64(a.momentum_score, b.momentum_score),
            MomentumSortKey::Rsi => cmp_f64(a.rsi14, b.rsi14),
            MomentumSortKey::Grade => a.momentum_grade.cmp(&b.momentum_grade),
        }
    }
}

pub fn sort_momentum(
    records: &mut [MomentumRecord],
    key: MomentumSortKey,
    direction: SortDirection,
) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentSortKey {
    #[default]
    Rank,
    Symbol,
    Mentions,
    AvgScore,
    Strength,
}

impl SentimentSortKey {
    fn compare(self, a: &SentimentRecord, b: &SentimentRecord) -> Ordering {
        match self {
            SentimentSortKey::Rank => a.rank.cmp(&b.rank),
            SentimentSortKey::Symbol => a.symbol.cmp(&b.symbol),
            SentimentSortKey::Mentions => a.mentions.cmp(&b.mentions),
            SentimentSortKey::AvgScore => cmp_f64(a.avg_score, b.avg_score),
            SentimentSortKey::Strength => a.strength.cmp(&b.strength),
        }
    }
}

pub fn sort_sentiment(
    records: &mut [SentimentRecord],
    key: SentimentSortKey,
    direction: SortDirection,
) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteSortKey {
    #[default]
    Symbol,
    Price,
    ChangePercent,
    MarketCap,
    Volume,
}

impl QuoteSortKey {
    fn compare(self, a: &Quote, b: &Quote) -> Ordering {
        match self {
            QuoteSortKey::Symbol => a.symbol.cmp(&b.symbol),
            QuoteSortKey::Price => cmp_f64(a.price, b.price),
            QuoteSortKey::ChangePercent => cmp_f64(a.change_percent, b.change_percent),
            QuoteSortKey::MarketCap => cmp_f64(a.market_cap, b.market_cap),
            QuoteSortKey::Volume => a.volume.cmp(&b.volume),
        }
    }
}

pub fn sort_quotes(records: &mut [Quote], key: QuoteSortKey, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::momentum::derive_momentum;
    use crate::sentiment::derive_sentiment;
    use crate::universe::WATCHLIST_SYMBOLS;
    use chrono::{TimeZone, Utc};

    #[test]
    fn momentum_sorts_by_each_key() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        let mut records = derive_momentum(&WATCHLIST_SYMBOLS, now);

        sort_momentum(&mut records, MomentumSortKey::Symbol, SortDirection::Ascending);
        for pair in records.windows(2) {
            assert!(pair[0].symbol <= pair[1].symbol);
        }

        sort_momentum(&mut records, MomentumSortKey::Score, SortDirection::Descending);
        for pair in records.windows(2) {
            assert!(pair[0].momentum_score >= pair[1].momentum_score);
        }

        // Descending by score is exactly the generated rank order.
        for pair in records.windows(2) {
            assert!(pair[0].momentum_rank < pair[1].momentum_rank);
        }
    }

    #[test]
    fn sentiment_sorts_by_mentions_both_ways() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        let mut records = derive_sentiment(&WATCHLIST_SYMBOLS, now);

        sort_sentiment(&mut records, SentimentSortKey::Mentions, SortDirection::Ascending);
        for pair in records.windows(2) {
            assert!(pair[0].mentions <= pair[1].mentions);
        }

        sort_sentiment(&mut records, SentimentSortKey::Mentions, SortDirection::Descending);
        for pair in records.windows(2) {
            assert!(pair[0].mentions >= pair[1].mentions);
        }
    }

    #[test]
    fn quotes_sort_by_market_cap() {
        let mut quotes = crate::ingest::mock::mock_quotes();
        sort_quotes(&mut quotes, QuoteSortKey::MarketCap, SortDirection::Descending);
        for pair in quotes.windows(2) {
            assert!(pair[0].market_cap >= pair[1].market_cap);
        }
        assert_eq!(quotes[0].symbol, "AAPL");
    }
}
