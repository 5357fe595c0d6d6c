use crate::engine::normalize::to_non_negative;
use crate::types::config::HeavyMultipliers;
use serde::{Deserialize, Serialize};

/// Item units by weight class. `light` covers everything unclassified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantityBreakdown {
    pub light: f64,
    pub water: f64,
    pub litter: f64,
    pub dog: f64,
    pub soda: f64,
    pub heavy_other: f64,
}

impl QuantityBreakdown {
    pub fn light(units: f64) -> Self {
        Self {
            light: units,
            ..Self::default()
        }
    }

    /// Builds a breakdown from a total unit count, deriving the light share as
    /// whatever the heavy classes leave over (never negative).
    pub fn from_total(total: f64, heavies: QuantityBreakdown) -> Self {
        let heavies = heavies.normalized();
        Self {
            light: to_non_negative(to_non_negative(total) - heavies.heavy_units()),
            ..heavies
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            light: to_non_negative(self.light),
            water: to_non_negative(self.water),
            litter: to_non_negative(self.litter),
            dog: to_non_negative(self.dog),
            soda: to_non_negative(self.soda),
            heavy_other: to_non_negative(self.heavy_other),
        }
    }

    pub fn heavy_units(&self) -> f64 {
        self.water + self.litter + self.dog + self.soda + self.heavy_other
    }

    pub fn total_units(&self) -> f64 {
        self.light + self.heavy_units()
    }
}

/// Carrying effort in light-item units: light counts once, each heavy class
/// counts at its multiplier. Fields are normalized before weighting.
pub fn weighted_quantity(qty: &QuantityBreakdown, multipliers: &HeavyMultipliers) -> f64 {
    let qty = qty.normalized();
    qty.light
        + multipliers.water * qty.water
        + multipliers.litter * qty.litter
        + multipliers.dog * qty.dog
        + multipliers.soda * qty.soda
        + multipliers.heavy_other * qty.heavy_other
}
