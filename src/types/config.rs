use crate::error::WorthItError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_SCORES: [u32; 2] = [60, 75];
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Per-class carrying weight. Light items always count as 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeavyMultipliers {
    pub water: f64,
    pub litter: f64,
    pub dog: f64,
    pub soda: f64,
    pub heavy_other: f64,
}

impl Default for HeavyMultipliers {
    fn default() -> Self {
        Self {
            water: 2.0,
            litter: 1.7,
            dog: 1.8,
            soda: 1.3,
            heavy_other: 1.5,
        }
    }
}

impl HeavyMultipliers {
    /// Every class at weight 1, so weighted quantity equals the raw unit count.
    pub fn flat() -> Self {
        Self {
            water: 1.0,
            litter: 1.0,
            dog: 1.0,
            soda: 1.0,
            heavy_other: 1.0,
        }
    }
}

/// Calibration anchors: `r_bad` maps to the bottom of the score range,
/// `r_great` to the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateMap {
    pub r_bad: f64,
    pub r_great: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShoppingConfig {
    pub tier1_limit: f64,
    pub tier2_limit: f64,
    pub tier1_cost: f64,
    pub tier2_cost: f64,
    pub tier3_cost: f64,
    pub customer_overhead: f64,
    pub r_bad: f64,
    pub r_great: f64,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            tier1_limit: 30.0,
            tier2_limit: 60.0,
            tier1_cost: 0.20,
            tier2_cost: 0.40,
            tier3_cost: 0.80,
            customer_overhead: 1.0,
            r_bad: 0.75,
            r_great: 2.10,
        }
    }
}

impl ShoppingConfig {
    pub fn rate_map(&self) -> RateMap {
        RateMap {
            r_bad: self.r_bad,
            r_great: self.r_great,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupConfig {
    pub alpha_pick: f64,
    pub stop_overhead: f64,
    pub r_bad: f64,
    pub r_great: f64,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            alpha_pick: 0.18,
            stop_overhead: 1.0,
            r_bad: 1.10,
            r_great: 3.00,
        }
    }
}

impl PickupConfig {
    pub fn rate_map(&self) -> RateMap {
        RateMap {
            r_bad: self.r_bad,
            r_great: self.r_great,
        }
    }
}

/// Lower edges of the ACCEPT and MAYBE buckets, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub accept: f64,
    pub maybe: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            accept: 60.0,
            maybe: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultiplierOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub litter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dog: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soda: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heavy_other: Option<f64>,
}

impl MultiplierOverrides {
    pub fn resolve(&self) -> HeavyMultipliers {
        let defaults = HeavyMultipliers::default();
        HeavyMultipliers {
            water: self.water.unwrap_or(defaults.water),
            litter: self.litter.unwrap_or(defaults.litter),
            dog: self.dog.unwrap_or(defaults.dog),
            soda: self.soda.unwrap_or(defaults.soda),
            heavy_other: self.heavy_other.unwrap_or(defaults.heavy_other),
        }
    }
}

impl From<HeavyMultipliers> for MultiplierOverrides {
    fn from(table: HeavyMultipliers) -> Self {
        Self {
            water: Some(table.water),
            litter: Some(table.litter),
            dog: Some(table.dog),
            soda: Some(table.soda),
            heavy_other: Some(table.heavy_other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShoppingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier1_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier2_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier1_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier2_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier3_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_overhead: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_bad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_great: Option<f64>,
}

impl ShoppingOverrides {
    pub fn resolve(&self) -> ShoppingConfig {
        let defaults = ShoppingConfig::default();
        ShoppingConfig {
            tier1_limit: self.tier1_limit.unwrap_or(defaults.tier1_limit),
            tier2_limit: self.tier2_limit.unwrap_or(defaults.tier2_limit),
            tier1_cost: self.tier1_cost.unwrap_or(defaults.tier1_cost),
            tier2_cost: self.tier2_cost.unwrap_or(defaults.tier2_cost),
            tier3_cost: self.tier3_cost.unwrap_or(defaults.tier3_cost),
            customer_overhead: self
                .customer_overhead
                .unwrap_or(defaults.customer_overhead),
            r_bad: self.r_bad.unwrap_or(defaults.r_bad),
            r_great: self.r_great.unwrap_or(defaults.r_great),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickupOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha_pick: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_overhead: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_bad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_great: Option<f64>,
}

impl PickupOverrides {
    pub fn resolve(&self) -> PickupConfig {
        let defaults = PickupConfig::default();
        PickupConfig {
            alpha_pick: self.alpha_pick.unwrap_or(defaults.alpha_pick),
            stop_overhead: self.stop_overhead.unwrap_or(defaults.stop_overhead),
            r_bad: self.r_bad.unwrap_or(defaults.r_bad),
            r_great: self.r_great.unwrap_or(defaults.r_great),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maybe: Option<f64>,
}

impl ThresholdOverrides {
    pub fn resolve(&self) -> VerdictThresholds {
        let defaults = VerdictThresholds::default();
        VerdictThresholds {
            accept: self.accept.unwrap_or(defaults.accept),
            maybe: self.maybe.unwrap_or(defaults.maybe),
        }
    }
}

/// Partial overrides for one calculation, merged over the built-in defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalcOptions<C> {
    pub multipliers: MultiplierOverrides,
    pub cfg: C,
    pub thresholds: ThresholdOverrides,
}

pub type ShoppingOptions = CalcOptions<ShoppingOverrides>;
pub type PickupOptions = CalcOptions<PickupOverrides>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsConfig {
    #[serde(default)]
    pub scores: Vec<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
}

/// Contents of a merged `worthit.toml`; every table and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorthItConfig {
    #[serde(default)]
    pub multipliers: MultiplierOverrides,
    #[serde(default)]
    pub shopping: ShoppingOverrides,
    #[serde(default)]
    pub pickup: PickupOverrides,
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
    pub targets: Option<TargetsConfig>,
    pub log: Option<LogConfig>,
}

/// Fully resolved configuration, as printed by `worthit defaults`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    pub multipliers: HeavyMultipliers,
    pub shopping: ShoppingConfig,
    pub pickup: PickupConfig,
    pub thresholds: VerdictThresholds,
    pub targets: EffectiveTargets,
    pub log: EffectiveLog,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveTargets {
    pub scores: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveLog {
    pub level: String,
}

impl WorthItConfig {
    pub fn shopping_options(&self) -> ShoppingOptions {
        CalcOptions {
            multipliers: self.multipliers,
            cfg: self.shopping,
            thresholds: self.thresholds,
        }
    }

    pub fn pickup_options(&self) -> PickupOptions {
        CalcOptions {
            multipliers: self.multipliers,
            cfg: self.pickup,
            thresholds: self.thresholds,
        }
    }

    pub fn target_scores(&self) -> Vec<u32> {
        match &self.targets {
            Some(targets) if !targets.scores.is_empty() => targets.scores.clone(),
            _ => DEFAULT_TARGET_SCORES.to_vec(),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn effective(&self) -> EffectiveConfig {
        EffectiveConfig {
            multipliers: self.multipliers.resolve(),
            shopping: self.shopping.resolve(),
            pickup: self.pickup.resolve(),
            thresholds: self.thresholds.resolve(),
            targets: EffectiveTargets {
                scores: self.target_scores(),
            },
            log: EffectiveLog {
                level: self.log_level().to_string(),
            },
        }
    }

    /// Rejects file-supplied values the engine would compute with but that
    /// invert or collapse the scoring intent.
    pub fn validate(&self) -> Result<(), WorthItError> {
        let multipliers = self.multipliers.resolve();
        for (key, value) in [
            ("water", multipliers.water),
            ("litter", multipliers.litter),
            ("dog", multipliers.dog),
            ("soda", multipliers.soda),
            ("heavy_other", multipliers.heavy_other),
        ] {
            require_non_negative(&format!("multipliers.{key}"), value)?;
        }

        let shopping = self.shopping.resolve();
        for (key, value) in [
            ("tier1_limit", shopping.tier1_limit),
            ("tier2_limit", shopping.tier2_limit),
            ("tier1_cost", shopping.tier1_cost),
            ("tier2_cost", shopping.tier2_cost),
            ("tier3_cost", shopping.tier3_cost),
            ("customer_overhead", shopping.customer_overhead),
        ] {
            require_non_negative(&format!("shopping.{key}"), value)?;
        }
        if shopping.tier2_limit < shopping.tier1_limit {
            return Err(WorthItError::ConfigParse(format!(
                "shopping.tier2_limit ({}) must not be below shopping.tier1_limit ({})",
                shopping.tier2_limit, shopping.tier1_limit
            )));
        }
        validate_rate_map("shopping", shopping.rate_map())?;

        let pickup = self.pickup.resolve();
        require_non_negative("pickup.alpha_pick", pickup.alpha_pick)?;
        require_non_negative("pickup.stop_overhead", pickup.stop_overhead)?;
        validate_rate_map("pickup", pickup.rate_map())?;

        let thresholds = self.thresholds.resolve();
        if !thresholds.accept.is_finite() || !thresholds.maybe.is_finite() {
            return Err(WorthItError::ConfigParse(
                "thresholds.accept and thresholds.maybe must be finite".to_string(),
            ));
        }
        if thresholds.maybe > thresholds.accept {
            return Err(WorthItError::ConfigParse(format!(
                "thresholds.maybe ({}) must not exceed thresholds.accept ({})",
                thresholds.maybe, thresholds.accept
            )));
        }

        if let Some(targets) = &self.targets {
            if let Some(bad) = targets
                .scores
                .iter()
                .find(|score| !(1..=100).contains(*score))
            {
                return Err(WorthItError::ConfigParse(format!(
                    "targets.scores entries must be between 1 and 100 (found {bad})"
                )));
            }
        }

        Ok(())
    }
}

fn require_non_negative(key: &str, value: f64) -> Result<(), WorthItError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WorthItError::ConfigParse(format!(
            "{key} must be a finite non-negative number (found {value})"
        )))
    }
}

fn validate_rate_map(section: &str, map: RateMap) -> Result<(), WorthItError> {
    require_non_negative(&format!("{section}.r_bad"), map.r_bad)?;
    require_non_negative(&format!("{section}.r_great"), map.r_great)?;
    if map.r_great <= map.r_bad {
        return Err(WorthItError::ConfigParse(format!(
            "{section}.r_great ({}) must be greater than {section}.r_bad ({})",
            map.r_great, map.r_bad
        )));
    }
    Ok(())
}
