//! Scoring engine: normalize, weight, estimate effort in equivalent miles,
//! turn the resulting rate into a 1-100 score and a verdict.
//!
//! Every function is pure. Calls share nothing and can run concurrently.

pub mod effort;
pub mod inverse;
pub mod mapper;
pub mod normalize;
pub mod weighting;

use crate::types::config::{
    HeavyMultipliers, PickupConfig, PickupOptions, ShoppingConfig, ShoppingOptions,
};
use crate::types::scoring::{
    Breakdown, EffortConfig, NormalizedPickup, NormalizedShopping, OfferInputs, OfferKind,
    ParamsUsed, PickupInput, ScoreResult, ShoppingInput,
};
use normalize::{round_to, to_count, to_non_negative, to_tally};
use tracing::debug;

pub use inverse::payout_for_target_score;
pub use weighting::{weighted_quantity, QuantityBreakdown};

const DISPLAY_DECIMALS: i32 = 2;

pub fn normalize_shopping(input: &ShoppingInput) -> NormalizedShopping {
    NormalizedShopping {
        payout: to_non_negative(input.payout),
        d_out: to_non_negative(input.d_out),
        d_back: to_non_negative(input.d_back),
        customers: to_count(input.customers),
        item_count: to_tally(input.item_count),
        qty: input.qty.normalized(),
    }
}

pub fn normalize_pickup(input: &PickupInput) -> NormalizedPickup {
    NormalizedPickup {
        payout: to_non_negative(input.payout),
        d_route: to_non_negative(input.d_route),
        d_back: to_non_negative(input.d_back),
        stops: to_count(input.stops),
        qty: input.qty.normalized(),
    }
}

/// Unrounded effort figures for one offer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effort {
    pub weighted: f64,
    /// Tiered picking effort; shopping only.
    pub item_effort: Option<f64>,
    pub eq_mi: f64,
}

pub fn shopping_effort(
    inputs: &NormalizedShopping,
    multipliers: &HeavyMultipliers,
    cfg: &ShoppingConfig,
) -> Effort {
    let weighted = weighted_quantity(&inputs.qty, multipliers);
    let item_effort = effort::shopping_item_effort(weighted, cfg);
    let eq_mi = effort::shopping_equivalent_miles(
        inputs.d_out,
        inputs.d_back,
        item_effort,
        inputs.customers,
        cfg,
    );
    Effort {
        weighted,
        item_effort: Some(item_effort),
        eq_mi,
    }
}

pub fn pickup_effort(
    inputs: &NormalizedPickup,
    multipliers: &HeavyMultipliers,
    cfg: &PickupConfig,
) -> Effort {
    let weighted = weighted_quantity(&inputs.qty, multipliers);
    let eq_mi = effort::pickup_equivalent_miles(
        inputs.d_route,
        inputs.d_back,
        weighted,
        inputs.stops,
        cfg,
    );
    Effort {
        weighted,
        item_effort: None,
        eq_mi,
    }
}

pub fn calc_shopping_score(input: &ShoppingInput, options: &ShoppingOptions) -> ScoreResult {
    let multipliers = options.multipliers.resolve();
    let cfg = options.cfg.resolve();
    let thresholds = options.thresholds.resolve();

    let inputs = normalize_shopping(input);
    let Effort {
        weighted,
        item_effort,
        eq_mi,
    } = shopping_effort(&inputs, &multipliers, &cfg);
    let item_effort = item_effort.unwrap_or_default();
    let rate = mapper::rate(inputs.payout, eq_mi);
    let score = mapper::score_from_rate(rate, cfg.rate_map());
    let verdict = mapper::score_to_verdict(f64::from(score), &thresholds);

    debug!(
        weighted,
        item_effort,
        eq_mi,
        rate,
        score,
        %verdict,
        "scored shopping offer"
    );

    ScoreResult {
        kind: OfferKind::Shopping,
        inputs: OfferInputs::Shopping(inputs),
        params_used: ParamsUsed {
            multipliers,
            cfg: EffortConfig::Shopping(cfg),
            thresholds,
        },
        breakdown: Breakdown {
            weighted_qty: round_to(weighted, DISPLAY_DECIMALS),
            total_units: round_to(inputs.qty.total_units(), DISPLAY_DECIMALS),
            item_effort: Some(round_to(item_effort, DISPLAY_DECIMALS)),
            eq_mi: round_to(eq_mi, DISPLAY_DECIMALS),
            rate: round_to(rate, DISPLAY_DECIMALS),
        },
        score,
        verdict,
        valid: eq_mi > 0.0,
    }
}

pub fn calc_pickup_score(input: &PickupInput, options: &PickupOptions) -> ScoreResult {
    let multipliers = options.multipliers.resolve();
    let cfg = options.cfg.resolve();
    let thresholds = options.thresholds.resolve();

    let inputs = normalize_pickup(input);
    let Effort { weighted, eq_mi, .. } = pickup_effort(&inputs, &multipliers, &cfg);
    let rate = mapper::rate(inputs.payout, eq_mi);
    let score = mapper::score_from_rate(rate, cfg.rate_map());
    let verdict = mapper::score_to_verdict(f64::from(score), &thresholds);

    debug!(weighted, eq_mi, rate, score, %verdict, "scored pickup offer");

    ScoreResult {
        kind: OfferKind::Pickup,
        inputs: OfferInputs::Pickup(inputs),
        params_used: ParamsUsed {
            multipliers,
            cfg: EffortConfig::Pickup(cfg),
            thresholds,
        },
        breakdown: Breakdown {
            weighted_qty: round_to(weighted, DISPLAY_DECIMALS),
            total_units: round_to(inputs.qty.total_units(), DISPLAY_DECIMALS),
            item_effort: None,
            eq_mi: round_to(eq_mi, DISPLAY_DECIMALS),
            rate: round_to(rate, DISPLAY_DECIMALS),
        },
        score,
        verdict,
        valid: eq_mi > 0.0,
    }
}
