//! Plain-text table rendering for the three dashboards.

use chrono::{DateTime, Utc};

use delta32_core::domain::momentum::MomentumRecord;
use delta32_core::domain::quote::Quote;
use delta32_core::domain::sentiment::SentimentRecord;
use delta32_core::format::{
    format_large_number, format_market_cap, format_mentions, format_momentum_score,
    format_relative_time,
};
use delta32_core::momentum::MomentumStats;
use delta32_core::sentiment::SentimentStats;

pub fn momentum_table(records: &[MomentumRecord], stats: &MomentumStats) {
    println!(
        "{} symbols | {} bullish | {} bearish | {} breakouts | {} high grades | {} strong trends",
        stats.total_symbols,
        stats.bullish,
        stats.bearish,
        stats.active_breakouts,
        stats.high_grades,
        stats.strong_trends,
    );
    println!();
    println!(
        "{:>4}  {:<6} {:<38} {:>9} {:>8} {:>8} {:>6} {:>6} {:<6} {:<12} {:<8}",
        "RANK", "SYMBOL", "NAME", "PRICE", "CHG%", "SCORE", "RSI", "ATR", "GRADE", "TREND", "BREAKOUT"
    );
    for r in records {
        println!(
            "{:>4}  {:<6} {:<38} {:>9.2} {:>7.2}% {:>8} {:>6.1} {:>6.2} {:<6} {:<12} {:<8}",
            r.momentum_rank,
            r.symbol,
            truncate(&r.name, 38),
            r.price,
            r.change_percent,
            format_momentum_score(r.momentum_score),
            r.rsi14,
            r.atr14,
            r.momentum_grade.to_string(),
            r.trend_strength.to_string(),
            r.breakout_type.to_string(),
        );
    }
}

pub fn sentiment_table(
    records: &[SentimentRecord],
    stats: &SentimentStats,
    with_posts: bool,
    now: DateTime<Utc>,
) {
    println!(
        "{} symbols | {} bullish | {} bearish | {} high activity | {} rising | {} total mentions",
        stats.total_symbols,
        stats.bullish,
        stats.bearish,
        stats.high_activity,
        stats.rising_trends,
        format_mentions(stats.total_mentions.min(u64::from(u32::MAX)) as u32),
    );
    println!();
    println!(
        "{:>4}  {:<6} {:>8} {:>7} {:<14} {:<8} {:>8}",
        "RANK", "SYMBOL", "MENTIONS", "SCORE", "SENTIMENT", "TREND", "STRENGTH"
    );
    for r in records {
        println!(
            "{:>4}  {:<6} {:>8} {:>7.2} {:<14} {:<8} {:>8}",
            r.rank,
            r.symbol,
            format_mentions(r.mentions),
            r.avg_score,
            r.sentiment.to_string(),
            r.trend.to_string(),
            r.strength,
        );
        if with_posts {
            for post in &r.recent_posts {
                println!(
                    "      r/{:<18} {:>6}pts  {:<10} {}",
                    post.subreddit,
                    post.score,
                    format_relative_time(post.timestamp, now),
                    post.title,
                );
            }
        }
    }
}

pub fn watchlist_table(quotes: &[Quote]) {
    println!(
        "{:<6} {:<24} {:>9} {:>8} {:>8} {:>10} {:>12}",
        "SYMBOL", "NAME", "PRICE", "CHG", "CHG%", "MKT CAP", "VOLUME"
    );
    for q in quotes {
        println!(
            "{:<6} {:<24} {:>9.2} {:>8.2} {:>7.2}% {:>10} {:>12}",
            q.symbol,
            truncate(&q.name, 24),
            q.price,
            q.change,
            q.change_percent,
            format_market_cap(q.market_cap),
            format_large_number(q.volume),
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_names_and_shortens_long_ones() {
        assert_eq!(truncate("Tesla Inc", 24), "Tesla Inc");
        let long = "Bitwise Crypto Industry Innovators ETF";
        let cut = truncate(long, 24);
        assert_eq!(cut.chars().count(), 24);
        assert!(cut.ends_with('\u{2026}'));
    }
}
