//! Deterministic pseudo-random values seeded by strings.
//!
//! Every "live" number on the dashboards comes from here: the same seed
//! string always maps to the same value, across runs and platforms, so a
//! regenerated table is identical to the previous one.

/// 32-bit polynomial rolling hash (`h = h*31 + char`) with signed wraparound,
/// absolute-valued. Empty input hashes to 0.
fn hash_code(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in s.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

/// Returns a deterministic value in `[min, max)` derived from `seed`.
///
/// The hash is reduced modulo 1000, so the output takes one of at most 1000
/// evenly spaced values across the range. An empty seed maps to `min`.
pub fn seeded_random(min: f64, max: f64, seed: &str) -> f64 {
    let fraction = f64::from(hash_code(seed) % 1000) / 1000.0;
    min + fraction * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_across_calls() {
        for seed in ["AAPL", "TSLA_mom21", "SOFI_mentions", "x"] {
            let a = seeded_random(-50.0, 50.0, seed);
            let b = seeded_random(-50.0, 50.0, seed);
            assert_eq!(a.to_bits(), b.to_bits(), "seed {seed} drifted");
        }
    }

    #[test]
    fn stays_within_half_open_range() {
        let seeds = ["AAPL", "MSFT", "TSLA", "_change", "", "longer seed string"];
        for seed in seeds {
            let v = seeded_random(10.0, 500.0, seed);
            assert!((10.0..500.0).contains(&v), "seed {seed} gave {v}");
            let w = seeded_random(-0.8, 0.8, seed);
            assert!((-0.8..0.8).contains(&w), "seed {seed} gave {w}");
        }
    }

    #[test]
    fn empty_seed_maps_to_min() {
        assert_eq!(hash_code(""), 0);
        assert_eq!(seeded_random(20.0, 80.0, ""), 20.0);
        assert_eq!(seeded_random(-5.0, 5.0, ""), -5.0);
    }

    #[test]
    fn matches_reference_values() {
        // Captured from the reference hash: "abc" -> 96354, fraction 0.354.
        assert_eq!(hash_code("abc"), 96354);
        assert_eq!(seeded_random(0.0, 1000.0, "abc"), 354.0);

        // Golden regression value for a real dashboard seed.
        let rsi = seeded_random(20.0, 80.0, "AAPL_rsi");
        assert!((rsi - 34.7).abs() < 1e-9, "AAPL_rsi gave {rsi}");
    }

    #[test]
    fn negative_intermediate_hash_is_absolute_valued() {
        // Long seeds overflow the signed accumulator; the fraction must stay
        // non-negative regardless.
        let v = seeded_random(0.0, 1.0, "WWWWWWWWWWWWWWWWWWWW_sentiment");
        assert!((0.0..1.0).contains(&v));
    }
}
