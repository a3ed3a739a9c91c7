//! Display formatting shared by the dashboards. Pure numeric-to-string
//! mappings with fixed unit thresholds.

use chrono::{DateTime, Utc};

/// `$2.75T` / `$403.00B` / `$5.20M`, comma-grouped dollars below a million.
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= 1e12 {
        format!("${:.2}T", market_cap / 1e12)
    } else if market_cap >= 1e9 {
        format!("${:.2}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("${:.2}M", market_cap / 1e6)
    } else {
        format!("${}", format_large_number(market_cap as u64))
    }
}

/// Comma-grouped integer, e.g. 58432100 -> "58,432,100".
pub fn format_large_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed score with two decimals and an explicit `+` for positive values.
pub fn format_momentum_score(score: f64) -> String {
    if score > 0.0 {
        format!("+{score:.2}")
    } else {
        format!("{score:.2}")
    }
}

/// Mention counts collapse to a `k` suffix at 1000 and above.
pub fn format_mentions(mentions: u32) -> String {
    if mentions >= 1000 {
        format!("{:.1}k", f64::from(mentions) / 1000.0)
    } else {
        mentions.to_string()
    }
}

/// "Just now" under an hour, hour buckets under a day, day buckets after.
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn market_cap_unit_thresholds() {
        assert_eq!(format_market_cap(2_750_000_000_000.0), "$2.75T");
        assert_eq!(format_market_cap(403_000_000_000.0), "$403.00B");
        assert_eq!(format_market_cap(5_200_000.0), "$5.20M");
        assert_eq!(format_market_cap(950_000.0), "$950,000");
        assert_eq!(format_market_cap(0.0), "$0");
    }

    #[test]
    fn large_numbers_are_comma_grouped() {
        assert_eq!(format_large_number(0), "0");
        assert_eq!(format_large_number(999), "999");
        assert_eq!(format_large_number(1_000), "1,000");
        assert_eq!(format_large_number(58_432_100), "58,432,100");
    }

    #[test]
    fn momentum_score_carries_explicit_sign() {
        assert_eq!(format_momentum_score(12.345), "+12.35");
        assert_eq!(format_momentum_score(-3.2), "-3.20");
        assert_eq!(format_momentum_score(0.0), "0.00");
    }

    #[test]
    fn mentions_k_suffix_starts_at_1000() {
        assert_eq!(format_mentions(250), "250");
        assert_eq!(format_mentions(999), "999");
        assert_eq!(format_mentions(1000), "1.0k");
        assert_eq!(format_mentions(1500), "1.5k");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(now - Duration::minutes(30), now), "Just now");
        assert_eq!(format_relative_time(now - Duration::hours(5), now), "5h ago");
        assert_eq!(format_relative_time(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative_time(now - Duration::hours(49), now), "2d ago");
    }
}
