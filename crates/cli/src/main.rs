use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delta32_core::sort::{MomentumSortKey, QuoteSortKey, SentimentSortKey, SortDirection};
use delta32_core::universe::WATCHLIST_SYMBOLS;

mod render;

#[derive(Debug, Parser)]
#[command(name = "delta32", about = "DELTA32 dashboard data")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Momentum rankings for the watchlist universe.
    Momentum {
        #[arg(long, value_enum, default_value = "rank")]
        sort: MomentumColumn,
        #[arg(long, value_enum, default_value = "asc")]
        direction: Direction,
        /// Emit records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Reddit sentiment board for the watchlist universe.
    Reddit {
        #[arg(long, value_enum, default_value = "rank")]
        sort: SentimentColumn,
        #[arg(long, value_enum, default_value = "asc")]
        direction: Direction,
        #[arg(long)]
        json: bool,
        /// Include the synthetic recent-post list per symbol.
        #[arg(long)]
        posts: bool,
    },
    /// Current watchlist quotes (spreadsheet-backed, mock fallback).
    Watchlist {
        #[arg(long, value_enum)]
        sort: Option<QuoteColumn>,
        #[arg(long, value_enum, default_value = "asc")]
        direction: Direction,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for SortDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Asc => SortDirection::Ascending,
            Direction::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MomentumColumn {
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

impl From<MomentumColumn> for MomentumSortKey {
    fn from(c: MomentumColumn) -> Self {
        match c {
            MomentumColumn::Rank => MomentumSortKey::Rank,
            MomentumColumn::Symbol => MomentumSortKey::Symbol,
            MomentumColumn::Price => MomentumSortKey::Price,
            MomentumColumn::ChangePercent => MomentumSortKey::ChangePercent,
            MomentumColumn::Mom21 => MomentumSortKey::Mom21,
            MomentumColumn::Mom42 => MomentumSortKey::Mom42,
            MomentumColumn::Mom63 => MomentumSortKey::Mom63,
            MomentumColumn::Score => MomentumSortKey::Score,
            MomentumColumn::Rsi => MomentumSortKey::Rsi,
            MomentumColumn::Grade => MomentumSortKey::Grade,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SentimentColumn {
    Rank,
    Symbol,
    Mentions,
    AvgScore,
    Strength,
}

impl From<SentimentColumn> for SentimentSortKey {
    fn from(c: SentimentColumn) -> Self {
        match c {
            SentimentColumn::Rank => SentimentSortKey::Rank,
            SentimentColumn::Symbol => SentimentSortKey::Symbol,
            SentimentColumn::Mentions => SentimentSortKey::Mentions,
            SentimentColumn::AvgScore => SentimentSortKey::AvgScore,
            SentimentColumn::Strength => SentimentSortKey::Strength,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum QuoteColumn {
    Symbol,
    Price,
    ChangePercent,
    MarketCap,
    Volume,
}

impl From<QuoteColumn> for QuoteSortKey {
    fn from(c: QuoteColumn) -> Self {
        match c {
            QuoteColumn::Symbol => QuoteSortKey::Symbol,
            QuoteColumn::Price => QuoteSortKey::Price,
            QuoteColumn::ChangePercent => QuoteSortKey::ChangePercent,
            QuoteColumn::MarketCap => QuoteSortKey::MarketCap,
            QuoteColumn::Volume => QuoteSortKey::Volume,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let generated_at = chrono::Utc::now();

    match args.command {
        Command::Momentum {
            sort,
            direction,
            json,
        } => {
            let mut records =
                delta32_core::momentum::derive_momentum(&WATCHLIST_SYMBOLS, generated_at);
            let stats = delta32_core::momentum::MomentumStats::from_records(&records);
            tracing::info!(
                records = records.len(),
                breakouts = stats.active_breakouts,
                high_grades = stats.high_grades,
                "momentum rankings generated"
            );
            delta32_core::sort::sort_momentum(&mut records, sort.into(), direction.into());

            if json {
                print_json(&records)?;
            } else {
                render::momentum_table(&records, &stats);
            }
        }
        Command::Reddit {
            sort,
            direction,
            json,
            posts,
        } => {
            let mut records =
                delta32_core::sentiment::derive_sentiment(&WATCHLIST_SYMBOLS, generated_at);
            let stats = delta32_core::sentiment::SentimentStats::from_records(&records);
            tracing::info!(
                records = records.len(),
                total_mentions = stats.total_mentions,
                rising = stats.rising_trends,
                "sentiment board generated"
            );
            delta32_core::sort::sort_sentiment(&mut records, sort.into(), direction.into());

            if json {
                print_json(&records)?;
            } else {
                render::sentiment_table(&records, &stats, posts, generated_at);
            }
        }
        Command::Watchlist {
            sort,
            direction,
            json,
        } => {
            let settings = delta32_core::config::Settings::from_env()?;
            let mut quotes = delta32_core::ingest::fetch_watchlist(&settings).await;
            tracing::info!(rows = quotes.len(), "watchlist loaded");
            if let Some(column) = sort {
                delta32_core::sort::sort_quotes(&mut quotes, column.into(), direction.into());
            }

            if json {
                print_json(&quotes)?;
            } else {
                render::watchlist_table(&quotes);
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(records: &T) -> anyhow::Result<()> {
    match serde_json::to_string_pretty(records) {
        Ok(body) => {
            println!("{body}");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize records");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_json_renders_record_collections() {
        assert!(print_json(&delta32_core::ingest::mock::mock_quotes()).is_ok());

        let records = delta32_core::momentum::derive_momentum(&["TSLA"], chrono::Utc::now());
        assert!(print_json(&records).is_ok());
    }
}
