use crate::engine::normalize::parse_number;
use crate::engine::QuantityBreakdown;
use crate::types::scoring::{OfferKind, PickupInput, ShoppingInput};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "worthit",
    version,
    about = "Is this delivery offer worth it? Scores Shopping and Pickup runs"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file layered over ~/.config/worthit/config.toml and ./worthit.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an in-store Shopping run
    Shopping(ShoppingCommand),
    /// Score a staged Pickup run
    Pickup(PickupCommand),
    /// Payout needed for a given effort to reach a target score
    Target(TargetCommand),
    /// Weighted quantity for an item breakdown
    Weigh(WeighCommand),
    /// Print the effective configuration as TOML
    Defaults,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Kind {
    Shopping,
    Pickup,
}

impl From<Kind> for OfferKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Shopping => OfferKind::Shopping,
            Kind::Pickup => OfferKind::Pickup,
        }
    }
}

/// Item quantities by weight class. Values are read leniently: text that is
/// not a number counts as 0.
#[derive(Args, Debug, Clone, Default)]
pub struct QuantityArgs {
    /// Light (unclassified) units
    #[arg(long)]
    pub light: Option<String>,
    /// Total units including heavies; light is derived when --light is absent
    #[arg(long, conflicts_with = "light")]
    pub total_qty: Option<String>,
    /// Cases of bottled water
    #[arg(long)]
    pub water: Option<String>,
    /// Cat litter
    #[arg(long)]
    pub litter: Option<String>,
    /// Large dog food bags
    #[arg(long)]
    pub dog: Option<String>,
    /// Soda cases
    #[arg(long)]
    pub soda: Option<String>,
    /// Other heavy items (detergent, oil, ...)
    #[arg(long)]
    pub heavy_other: Option<String>,
}

impl QuantityArgs {
    pub fn breakdown(&self) -> QuantityBreakdown {
        let heavies = QuantityBreakdown {
            light: 0.0,
            water: lenient(self.water.as_deref()),
            litter: lenient(self.litter.as_deref()),
            dog: lenient(self.dog.as_deref()),
            soda: lenient(self.soda.as_deref()),
            heavy_other: lenient(self.heavy_other.as_deref()),
        };
        match (&self.light, &self.total_qty) {
            (None, Some(total)) => QuantityBreakdown::from_total(parse_number(total), heavies),
            (light, _) => QuantityBreakdown {
                light: lenient(light.as_deref()),
                ..heavies
            },
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Exit with code 2 when the verdict is SKIP
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ShoppingCommand {
    /// Total payout in dollars
    #[arg(long)]
    pub payout: String,
    /// Miles from the store to the last customer
    #[arg(long = "out")]
    pub d_out: String,
    /// Miles from the last customer back to the store (defaults to --out)
    #[arg(long = "back")]
    pub d_back: Option<String>,
    #[arg(long, default_value = "1")]
    pub customers: String,
    /// Distinct SKUs, shown for reference only
    #[arg(long)]
    pub item_count: Option<String>,
    #[command(flatten)]
    pub qty: QuantityArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl ShoppingCommand {
    pub fn input(&self) -> ShoppingInput {
        let d_out = parse_number(&self.d_out);
        ShoppingInput {
            payout: parse_number(&self.payout),
            d_out,
            d_back: self.d_back.as_deref().map_or(d_out, parse_number),
            customers: parse_number(&self.customers),
            item_count: lenient(self.item_count.as_deref()),
            qty: self.qty.breakdown(),
        }
    }
}

#[derive(Args)]
pub struct PickupCommand {
    /// Total payout in dollars
    #[arg(long)]
    pub payout: String,
    /// Whole route in miles (store through every stop), not per leg
    #[arg(long = "route")]
    pub d_route: String,
    /// Miles from the last stop back to the store (defaults to --route)
    #[arg(long = "back")]
    pub d_back: Option<String>,
    #[arg(long, default_value = "1")]
    pub stops: String,
    #[command(flatten)]
    pub qty: QuantityArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl PickupCommand {
    pub fn input(&self) -> PickupInput {
        let d_route = parse_number(&self.d_route);
        PickupInput {
            payout: parse_number(&self.payout),
            d_route,
            d_back: self.d_back.as_deref().map_or(d_route, parse_number),
            stops: parse_number(&self.stops),
            qty: self.qty.breakdown(),
        }
    }
}

#[derive(Args)]
pub struct TargetCommand {
    /// Equivalent miles of the offer
    #[arg(long)]
    pub eq_mi: String,
    /// Target score, clamped to 1..=100
    #[arg(long)]
    pub score: String,
    #[arg(long, value_enum, default_value = "shopping")]
    pub kind: Kind,
}

#[derive(Args)]
pub struct WeighCommand {
    #[command(flatten)]
    pub qty: QuantityArgs,
}

fn lenient(raw: Option<&str>) -> f64 {
    raw.map_or(0.0, parse_number)
}
