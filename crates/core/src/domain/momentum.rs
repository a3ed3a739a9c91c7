use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the momentum dashboard. Records are immutable snapshots; a
/// refresh produces an entirely new collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,

    /// Windowed momentum, MOM(n) = P(t) - P(t-n).
    pub mom21: f64,
    pub mom42: f64,
    pub mom63: f64,
    pub momentum_score: f64,
    /// 1-based position after sorting descending by `momentum_score`.
    pub momentum_rank: u32,

    pub rsi14: f64,
    pub atr14: f64,
    pub macd_hist: f64,

    pub momentum_grade: MomentumGrade,
    pub trend_strength: TrendStrength,

    pub is_breakout: bool,
    pub breakout_type: BreakoutType,

    pub last_updated: DateTime<Utc>,
}

/// Letter grade over the composite score; ordered best-first so tiers can be
/// compared with `<` / `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MomentumGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

impl std::fmt::Display for MomentumGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MomentumGrade::APlus => "A+",
            MomentumGrade::A => "A",
            MomentumGrade::BPlus => "B+",
            MomentumGrade::B => "B",
            MomentumGrade::CPlus => "C+",
            MomentumGrade::C => "C",
            MomentumGrade::D => "D",
            MomentumGrade::F => "F",
        };
        f.write_str(s)
    }
}

impl MomentumGrade {
    /// A+ / A / B+ count as "high grade" on the overview cards.
    pub fn is_high(self) -> bool {
        matches!(self, Self::APlus | Self::A | Self::BPlus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrendStrength {
    #[serde(rename = "Very Strong")]
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    #[serde(rename = "Very Weak")]
    VeryWeak,
}

impl std::fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrendStrength::VeryStrong => "Very Strong",
            TrendStrength::Strong => "Strong",
            TrendStrength::Moderate => "Moderate",
            TrendStrength::Weak => "Weak",
            TrendStrength::VeryWeak => "Very Weak",
        };
        f.write_str(s)
    }
}

impl TrendStrength {
    pub fn is_strong(self) -> bool {
        matches!(self, Self::VeryStrong | Self::Strong)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakoutType {
    Bullish,
    Bearish,
    None,
}

impl std::fmt::Display for BreakoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BreakoutType::Bullish => "bullish",
            BreakoutType::Bearish => "bearish",
            BreakoutType::None => "none",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_ordering_is_best_first() {
        assert!(MomentumGrade::APlus < MomentumGrade::A);
        assert!(MomentumGrade::BPlus < MomentumGrade::F);
        assert!(MomentumGrade::APlus.is_high());
        assert!(!MomentumGrade::B.is_high());
    }

    #[test]
    fn labels_serialize_like_the_dashboard() {
        assert_eq!(
            serde_json::to_string(&MomentumGrade::APlus).unwrap(),
            "\"A+\""
        );
        assert_eq!(
            serde_json::to_string(&TrendStrength::VeryStrong).unwrap(),
            "\"Very Strong\""
        );
        assert_eq!(
            serde_json::to_string(&BreakoutType::Bullish).unwrap(),
            "\"bullish\""
        );
        assert_eq!(MomentumGrade::BPlus.to_string(), "B+");
    }
}
