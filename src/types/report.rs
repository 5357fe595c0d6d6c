use crate::types::scoring::{Score, ScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetPayout {
    pub score: Score,
    pub payout: f64,
}

/// A score result plus the "what would I need to be paid" rows shown under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub targets: Vec<TargetPayout>,
}

impl OfferReport {
    pub fn new(result: ScoreResult, target_scores: &[Score]) -> Self {
        let targets = target_scores
            .iter()
            .map(|&score| TargetPayout {
                score,
                payout: result.payout_for_target(f64::from(score)),
            })
            .collect();
        Self { result, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calc_pickup_score, QuantityBreakdown};
    use crate::types::config::PickupOptions;
    use crate::types::scoring::PickupInput;

    #[test]
    fn report_computes_one_row_per_target() {
        let input = PickupInput {
            payout: 20.0,
            d_route: 10.0,
            d_back: 0.0,
            stops: 3.0,
            qty: QuantityBreakdown::default(),
        };
        let result = calc_pickup_score(&input, &PickupOptions::default());
        let report = OfferReport::new(result, &[60, 75]);
        assert_eq!(report.targets.len(), 2);
        // 12 * (1.10 + 0.60 * 1.90)
        assert_eq!(report.targets[0], TargetPayout { score: 60, payout: 26.88 });
        assert!(report.targets[1].payout > report.targets[0].payout);
    }
}
