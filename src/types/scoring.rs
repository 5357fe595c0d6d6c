use crate::engine::inverse::payout_for_target_score;
use crate::engine::weighting::QuantityBreakdown;
use crate::types::config::{HeavyMultipliers, PickupConfig, RateMap, ShoppingConfig, VerdictThresholds};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    Shopping,
    Pickup,
}

impl OfferKind {
    pub fn label(self) -> &'static str {
        match self {
            OfferKind::Shopping => "Shopping",
            OfferKind::Pickup => "Pickup",
        }
    }
}

/// Ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Skip,
    Maybe,
    Accept,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Accept => "ACCEPT",
            Verdict::Maybe => "MAYBE",
            Verdict::Skip => "SKIP",
        };
        f.write_str(label)
    }
}

/// Raw shopping offer as collected from the user. Values are normalized by
/// the engine, so anything numeric is acceptable here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingInput {
    pub payout: f64,
    /// Store to last customer.
    pub d_out: f64,
    /// Last customer back to the same store.
    pub d_back: f64,
    pub customers: f64,
    /// Distinct SKUs; shown alongside the result, never part of effort.
    pub item_count: f64,
    pub qty: QuantityBreakdown,
}

/// Raw pickup offer. `d_route` is the whole route, not a per-leg figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PickupInput {
    pub payout: f64,
    pub d_route: f64,
    pub d_back: f64,
    pub stops: f64,
    pub qty: QuantityBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedShopping {
    pub payout: f64,
    pub d_out: f64,
    pub d_back: f64,
    /// Floored, at least 1.
    pub customers: f64,
    /// Floored, at least 0.
    pub item_count: f64,
    pub qty: QuantityBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPickup {
    pub payout: f64,
    pub d_route: f64,
    pub d_back: f64,
    /// Floored, at least 1.
    pub stops: f64,
    pub qty: QuantityBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OfferInputs {
    Shopping(NormalizedShopping),
    Pickup(NormalizedPickup),
}

impl OfferInputs {
    pub fn payout(&self) -> f64 {
        match self {
            OfferInputs::Shopping(inputs) => inputs.payout,
            OfferInputs::Pickup(inputs) => inputs.payout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EffortConfig {
    Shopping(ShoppingConfig),
    Pickup(PickupConfig),
}

impl EffortConfig {
    pub fn rate_map(&self) -> RateMap {
        match self {
            EffortConfig::Shopping(cfg) => cfg.rate_map(),
            EffortConfig::Pickup(cfg) => cfg.rate_map(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamsUsed {
    pub multipliers: HeavyMultipliers,
    pub cfg: EffortConfig,
    pub thresholds: VerdictThresholds,
}

/// Intermediate quantities, rounded to cents-style precision for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub weighted_qty: f64,
    pub total_units: f64,
    /// Tiered picking effort; shopping only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_effort: Option<f64>,
    pub eq_mi: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub kind: OfferKind,
    pub inputs: OfferInputs,
    pub params_used: ParamsUsed,
    pub breakdown: Breakdown,
    pub score: Score,
    pub verdict: Verdict,
    /// False when equivalent miles is not strictly positive; score and
    /// verdict are then meaningless.
    pub valid: bool,
}

impl ScoreResult {
    pub fn rate_map(&self) -> RateMap {
        self.params_used.cfg.rate_map()
    }

    /// Payout this same offer would need to reach `target`.
    pub fn payout_for_target(&self, target: f64) -> f64 {
        payout_for_target_score(self.breakdown.eq_mi, target, self.rate_map())
    }
}
