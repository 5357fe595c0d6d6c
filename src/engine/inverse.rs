use crate::engine::mapper::{MAX_SCORE, MIN_SCORE};
use crate::engine::normalize::{round_to, to_number};
use crate::types::config::RateMap;

/// Payout needed for an offer of `eq_mi` equivalent miles to reach
/// `target_score`, holding the effort fixed. Rounded to cents, never negative.
pub fn payout_for_target_score(eq_mi: f64, target_score: f64, map: RateMap) -> f64 {
    let target = to_number(target_score).clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
    let fraction = target / 100.0;
    let required_rate = map.r_bad + fraction * (map.r_great - map.r_bad);
    round_to((to_number(eq_mi) * required_rate).max(0.0), 2)
}
