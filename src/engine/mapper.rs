use crate::engine::normalize::{safe_div, to_number};
use crate::types::config::{RateMap, VerdictThresholds};
use crate::types::scoring::Verdict;

pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 100;

/// Payout per equivalent mile, or 0 when there is no positive effort.
pub fn rate(payout: f64, eq_mi: f64) -> f64 {
    safe_div(payout, eq_mi)
}

/// Linear map of `rate` from `[r_bad, r_great]` onto the score range,
/// rounded and clamped to 1..=100.
pub fn score_from_rate(rate: f64, map: RateMap) -> u32 {
    let ratio = safe_div(to_number(rate) - map.r_bad, map.r_great - map.r_bad);
    let raw = (100.0 * ratio).round();
    raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u32
}

pub fn score_to_verdict(score: f64, thresholds: &VerdictThresholds) -> Verdict {
    let score = to_number(score);
    if score >= thresholds.accept {
        Verdict::Accept
    } else if score >= thresholds.maybe {
        Verdict::Maybe
    } else {
        Verdict::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOPPING: RateMap = RateMap {
        r_bad: 0.75,
        r_great: 2.10,
    };

    #[test]
    fn verdict_boundaries_are_inclusive() {
        let thresholds = VerdictThresholds::default();
        assert_eq!(score_to_verdict(60.0, &thresholds), Verdict::Accept);
        assert_eq!(score_to_verdict(59.0, &thresholds), Verdict::Maybe);
        assert_eq!(score_to_verdict(45.0, &thresholds), Verdict::Maybe);
        assert_eq!(score_to_verdict(44.0, &thresholds), Verdict::Skip);
        assert_eq!(score_to_verdict(100.0, &thresholds), Verdict::Accept);
        assert_eq!(score_to_verdict(1.0, &thresholds), Verdict::Skip);
        assert_eq!(score_to_verdict(f64::NAN, &thresholds), Verdict::Skip);
    }

    #[test]
    fn verdict_is_monotonic() {
        let thresholds = VerdictThresholds::default();
        let mut previous = Verdict::Skip;
        for score in 1..=100 {
            let verdict = score_to_verdict(f64::from(score), &thresholds);
            assert!(verdict >= previous, "verdict dropped at {score}");
            previous = verdict;
        }
    }

    #[test]
    fn custom_thresholds_move_buckets() {
        let thresholds = VerdictThresholds {
            accept: 80.0,
            maybe: 50.0,
        };
        assert_eq!(score_to_verdict(79.0, &thresholds), Verdict::Maybe);
        assert_eq!(score_to_verdict(49.0, &thresholds), Verdict::Skip);
    }

    #[test]
    fn score_clamps_at_both_ends() {
        assert_eq!(score_from_rate(0.0, SHOPPING), 1);
        assert_eq!(score_from_rate(0.75, SHOPPING), 1);
        assert_eq!(score_from_rate(2.10, SHOPPING), 100);
        assert_eq!(score_from_rate(50.0, SHOPPING), 100);
        assert_eq!(score_from_rate(f64::INFINITY, SHOPPING), 1);
    }

    #[test]
    fn score_is_linear_in_rate() {
        // midpoint of the calibration pair
        assert_eq!(score_from_rate(1.425, SHOPPING), 50);
        assert_eq!(score_from_rate(24.95 / 15.8, SHOPPING), 61);
    }

    #[test]
    fn collapsed_rate_map_scores_minimum() {
        let map = RateMap {
            r_bad: 2.0,
            r_great: 2.0,
        };
        assert_eq!(score_from_rate(5.0, map), 1);
    }

    #[test]
    fn rate_is_guarded() {
        assert_eq!(rate(10.0, 0.0), 0.0);
        assert_eq!(rate(20.0, 12.0), 20.0 / 12.0);
    }
}
