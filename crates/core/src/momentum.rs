//! Momentum derivation: per-symbol synthetic indicators, composite score,
//! grade, trend strength and breakout flags for the momentum dashboard.
//!
//! Generation is pure arithmetic over the symbol list. Every regeneration
//! recomputes the full set from scratch; there is no incremental update and
//! no persisted history.

use chrono::{DateTime, Utc};

use crate::domain::momentum::{BreakoutType, MomentumGrade, MomentumRecord, TrendStrength};
use crate::seed::seeded_random;
use crate::universe::company_name;

// Composite score weights: shorter windows get more weight for
// responsiveness. Tuning constants, not derived values.
const WEIGHT_MOM21: f64 = 0.5;
const WEIGHT_MOM42: f64 = 0.3;
const WEIGHT_MOM63: f64 = 0.2;

// A move larger than 1.5x ATR counts as a breakout.
const BREAKOUT_ATR_MULTIPLE: f64 = 1.5;

pub fn momentum_score(mom21: f64, mom42: f64, mom63: f64) -> f64 {
    mom21 * WEIGHT_MOM21 + mom42 * WEIGHT_MOM42 + mom63 * WEIGHT_MOM63
}

/// Ordered threshold ladder on `abs(score)`; the top grade additionally
/// requires positive score with RSI above 60.
pub fn assign_grade(score: f64, rsi: f64) -> MomentumGrade {
    let abs = score.abs();
    if abs > 15.0 && rsi > 60.0 && score > 0.0 {
        MomentumGrade::APlus
    } else if abs > 10.0 && score > 0.0 {
        MomentumGrade::A
    } else if abs > 7.0 {
        MomentumGrade::BPlus
    } else if abs > 4.0 {
        MomentumGrade::B
    } else if abs > 2.0 {
        MomentumGrade::CPlus
    } else if abs > 1.0 {
        MomentumGrade::C
    } else if abs > 0.5 {
        MomentumGrade::D
    } else {
        MomentumGrade::F
    }
}

/// Buckets `abs(score) + abs(rsi - 50)/10` into five strength tiers.
pub fn assess_trend_strength(score: f64, rsi: f64) -> TrendStrength {
    let combined = score.abs() + (rsi - 50.0).abs() / 10.0;
    if combined > 20.0 {
        TrendStrength::VeryStrong
    } else if combined > 12.0 {
        TrendStrength::Strong
    } else if combined > 6.0 {
        TrendStrength::Moderate
    } else if combined > 3.0 {
        TrendStrength::Weak
    } else {
        TrendStrength::VeryWeak
    }
}

pub fn detect_breakout(score: f64, atr: f64) -> (bool, BreakoutType) {
    if score.abs() <= atr * BREAKOUT_ATR_MULTIPLE {
        return (false, BreakoutType::None);
    }
    if score > 0.0 {
        (true, BreakoutType::Bullish)
    } else {
        (true, BreakoutType::Bearish)
    }
}

/// Derives one record per symbol, sorted descending by `momentum_score` with
/// ranks 1..N. Ties keep input order (the sort is stable).
///
/// `generated_at` stamps `last_updated` only; no field draws entropy from it,
/// so two calls with equal inputs produce identical sets.
pub fn derive_momentum(symbols: &[&str], generated_at: DateTime<Utc>) -> Vec<MomentumRecord> {
    let mut records: Vec<MomentumRecord> = symbols
        .iter()
        .map(|&symbol| derive_one(symbol, generated_at))
        .collect();

    records.sort_by(|a, b| {
        b.momentum_score
            .partial_cmp(&a.momentum_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, record) in records.iter_mut().enumerate() {
        record.momentum_rank = (i + 1) as u32;
    }

    records
}

fn derive_one(symbol: &str, generated_at: DateTime<Utc>) -> MomentumRecord {
    let price = seeded_random(10.0, 500.0, symbol);
    let change = seeded_random(-15.0, 15.0, &format!("{symbol}_change"));
    let change_percent = (change / price) * 100.0;

    // MOM(n) = P(t) - P(t-n), on three windows.
    let mom21 = seeded_random(-20.0, 30.0, &format!("{symbol}_mom21"));
    let mom42 = seeded_random(-25.0, 40.0, &format!("{symbol}_mom42"));
    let mom63 = seeded_random(-30.0, 50.0, &format!("{symbol}_mom63"));
    let rsi14 = seeded_random(20.0, 80.0, &format!("{symbol}_rsi"));
    let atr14 = seeded_random(1.0, 8.0, &format!("{symbol}_atr"));
    let macd_hist = seeded_random(-2.0, 2.0, &format!("{symbol}_macd"));

    let score = momentum_score(mom21, mom42, mom63);
    let (is_breakout, breakout_type) = detect_breakout(score, atr14);

    MomentumRecord {
        symbol: symbol.to_string(),
        name: company_name(symbol).to_string(),
        price,
        change,
        change_percent,
        mom21,
        mom42,
        mom63,
        momentum_score: score,
        momentum_rank: 0, // assigned after sorting
        rsi14,
        atr14,
        macd_hist,
        momentum_grade: assign_grade(score, rsi14),
        trend_strength: assess_trend_strength(score, rsi14),
        is_breakout,
        breakout_type,
        last_updated: generated_at,
    }
}

/// Aggregates for the dashboard overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MomentumStats {
    pub total_symbols: usize,
    pub bullish: usize,
    pub bearish: usize,
    pub active_breakouts: usize,
    pub high_grades: usize,
    pub strong_trends: usize,
}

impl MomentumStats {
    pub fn from_records(records: &[MomentumRecord]) -> Self {
        Self {
            total_symbols: records.len(),
            bullish: records.iter().filter(|r| r.momentum_score > 0.0).count(),
            bearish: records.iter().filter(|r| r.momentum_score < 0.0).count(),
            active_breakouts: records.iter().filter(|r| r.is_breakout).count(),
            high_grades: records
                .iter()
                .filter(|r| r.momentum_grade.is_high())
                .count(),
            strong_trends: records
                .iter()
                .filter(|r| r.trend_strength.is_strong())
                .count(),
        }
    }
}
