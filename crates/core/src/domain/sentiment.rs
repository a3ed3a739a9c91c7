use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the Reddit sentiment board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub symbol: String,
    /// 1-based position after sorting descending by `mentions`.
    pub rank: u32,
    pub mentions: u32,
    pub avg_score: f64,
    pub sentiment: SentimentLabel,
    pub trend: SentimentTrend,
    /// Composite activity strength, clamped to 10..=100.
    pub strength: u32,
    pub recent_posts: Vec<RedditPost>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    pub title: String,
    pub score: u32,
    pub url: String,
    pub subreddit: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        };
        f.write_str(s)
    }
}

impl SentimentLabel {
    pub fn is_bullish(self) -> bool {
        matches!(self, Self::VeryPositive | Self::Positive)
    }

    pub fn is_bearish(self) -> bool {
        matches!(self, Self::VeryNegative | Self::Negative)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentTrend {
    Rising,
    Falling,
    Stable,
}

impl std::fmt::Display for SentimentTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentTrend::Rising => "Rising",
            SentimentTrend::Falling => "Falling",
            SentimentTrend::Stable => "Stable",
        };
        f.write_str(s)
    }
}
