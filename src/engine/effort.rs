use crate::engine::normalize::to_non_negative;
use crate::types::config::{PickupConfig, ShoppingConfig};

/// In-store picking effort. Units up to `tier1_limit` cost `tier1_cost`, units
/// up to `tier2_limit` cost `tier2_cost`, and everything past that costs
/// `tier3_cost`.
pub fn shopping_item_effort(weighted_qty: f64, cfg: &ShoppingConfig) -> f64 {
    let q = to_non_negative(weighted_qty);
    let tier1 = q.min(cfg.tier1_limit);
    let tier2 = (q - cfg.tier1_limit)
        .max(0.0)
        .min(cfg.tier2_limit - cfg.tier1_limit);
    let tier3 = (q - cfg.tier2_limit).max(0.0);
    tier1 * cfg.tier1_cost + tier2 * cfg.tier2_cost + tier3 * cfg.tier3_cost
}

pub fn shopping_equivalent_miles(
    d_out: f64,
    d_back: f64,
    item_effort: f64,
    customers: f64,
    cfg: &ShoppingConfig,
) -> f64 {
    d_out + d_back + item_effort + cfg.customer_overhead * extra(customers)
}

/// Pickup is a single staged load, so handling scales linearly with
/// weighted quantity.
pub fn pickup_equivalent_miles(
    d_route: f64,
    d_back: f64,
    weighted_qty: f64,
    stops: f64,
    cfg: &PickupConfig,
) -> f64 {
    d_route + d_back + cfg.alpha_pick * weighted_qty + cfg.stop_overhead * extra(stops)
}

/// Units beyond the first; counts arrive already floored to at least 1.
fn extra(count: f64) -> f64 {
    (count - 1.0).max(0.0)
}
