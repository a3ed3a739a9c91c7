//! Reddit sentiment derivation: synthetic mention counts, sentiment labels
//! and recent-post lists for the sentiment board, ranked by mentions.

use chrono::{DateTime, Duration, Utc};

use crate::domain::sentiment::{RedditPost, SentimentLabel, SentimentRecord, SentimentTrend};
use crate::seed::seeded_random;

const SUBREDDITS: [&str; 5] = [
    "wallstreetbets",
    "stocks",
    "investing",
    "SecurityAnalysis",
    "ValueInvesting",
];

const POSTS_PER_SYMBOL: usize = 3;

const BULLISH_TITLES: [&str; 5] = [
    "{} to the moon! DD inside",
    "Why {} is my top pick for 2024",
    "{} breakout confirmed - massive potential",
    "{} earnings beat expectations - bullish",
    "{} technical analysis - strong buy signal",
];

const BEARISH_TITLES: [&str; 5] = [
    "{} warning signs - time to exit?",
    "{} disappointing results - bearish outlook",
    "Why I'm shorting {} - DD",
    "{} overvalued - sell signal",
    "{} technical breakdown - avoid",
];

const NEUTRAL_TITLES: [&str; 5] = [
    "{} weekly discussion thread",
    "{} earnings preview - what to expect",
    "{} chart analysis - sideways movement",
    "{} vs competitors - comparison",
    "{} long-term outlook discussion",
];

/// Maps an average score to a label. Evaluation order is fixed: the extreme
/// positive band first, then positive, then extreme negative, then negative.
pub fn bucket_sentiment(avg_score: f64) -> SentimentLabel {
    if avg_score > 0.4 {
        SentimentLabel::VeryPositive
    } else if avg_score > 0.1 {
        SentimentLabel::Positive
    } else if avg_score < -0.4 {
        SentimentLabel::VeryNegative
    } else if avg_score < -0.1 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn bucket_trend(draw: f64) -> SentimentTrend {
    if draw > 0.6 {
        SentimentTrend::Rising
    } else if draw < 0.3 {
        SentimentTrend::Falling
    } else {
        SentimentTrend::Stable
    }
}

/// strength = clamp(floor(mentions/5 + |avg_score|*50 + noise[0,20)), 10, 100)
fn activity_strength(mentions: u32, avg_score: f64, symbol: &str) -> u32 {
    let noise = seeded_random(0.0, 20.0, &format!("{symbol}_strength"));
    let raw = (f64::from(mentions) / 5.0 + avg_score.abs() * 50.0 + noise).floor();
    (raw as i64).clamp(10, 100) as u32
}

/// Derives one record per symbol, sorted descending by `mentions`, ranks
/// reassigned 1..N by that order.
pub fn derive_sentiment(symbols: &[&str], generated_at: DateTime<Utc>) -> Vec<SentimentRecord> {
    let mut records: Vec<SentimentRecord> = symbols
        .iter()
        .map(|&symbol| derive_one(symbol, generated_at))
        .collect();

    records.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    for (i, record) in records.iter_mut().enumerate() {
        record.rank = (i + 1) as u32;
    }

    records
}

fn derive_one(symbol: &str, generated_at: DateTime<Utc>) -> SentimentRecord {
    let mentions = seeded_random(5.0, 300.0, &format!("{symbol}_mentions")).floor() as u32;
    let avg_score = seeded_random(-0.8, 0.8, &format!("{symbol}_sentiment"));

    let sentiment = bucket_sentiment(avg_score);
    let trend = bucket_trend(seeded_random(0.0, 1.0, &format!("{symbol}_trend")));
    let strength = activity_strength(mentions, avg_score, symbol);

    let recent_posts = (0..POSTS_PER_SYMBOL)
        .map(|i| synth_post(symbol, avg_score, i, generated_at))
        .collect();

    SentimentRecord {
        symbol: symbol.to_string(),
        rank: 0, // assigned after sorting
        mentions,
        avg_score,
        sentiment,
        trend,
        strength,
        recent_posts,
        last_updated: generated_at,
    }
}

fn synth_post(
    symbol: &str,
    avg_score: f64,
    index: usize,
    generated_at: DateTime<Utc>,
) -> RedditPost {
    let pool: &[&str; 5] = if avg_score > 0.0 {
        &BULLISH_TITLES
    } else if avg_score < 0.0 {
        &BEARISH_TITLES
    } else {
        &NEUTRAL_TITLES
    };

    let title_idx =
        seeded_random(0.0, pool.len() as f64, &format!("{symbol}_title_{index}")).floor() as usize;
    let title = pool[title_idx].replace("{}", symbol);

    let score = seeded_random(10.0, 2000.0, &format!("{symbol}_score_{index}")).floor() as u32;

    let hours_ago = seeded_random(1.0, 24.0, &format!("{symbol}_time_{index}")).floor() as i64;
    let timestamp = generated_at - Duration::hours(hours_ago);

    let subreddit = SUBREDDITS[index % SUBREDDITS.len()];

    RedditPost {
        title,
        score,
        url: format!("https://reddit.com/r/{subreddit}/post_{symbol}_{index}"),
        subreddit: subreddit.to_string(),
        timestamp,
    }
}

/// Aggregates for the sentiment board overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SentimentStats {
    pub total_symbols: usize,
    pub bullish: usize,
    pub bearish: usize,
    pub high_activity: usize,
    pub rising_trends: usize,
    pub total_mentions: u64,
}

impl SentimentStats {
    pub fn from_records(records: &[SentimentRecord]) -> Self {
        Self {
            total_symbols: records.len(),
            bullish: records.iter().filter(|r| r.sentiment.is_bullish()).count(),
            bearish: records.iter().filter(|r| r.sentiment.is_bearish()).count(),
            high_activity: records.iter().filter(|r| r.mentions >= 100).count(),
            rising_trends: records
                .iter()
                .filter(|r| r.trend == SentimentTrend::Rising)
                .count(),
            total_mentions: records.iter().map(|r| u64::from(r.mentions)).sum(),
        }
    }
}
