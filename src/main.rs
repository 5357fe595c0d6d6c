use clap::Parser;
use tracing::{debug, warn};
use worthit::cli::{self, Commands};
use worthit::engine::{self, payout_for_target_score};
use worthit::error::WorthItError;
use worthit::report::{self, OutputFormat};
use worthit::types::config::WorthItConfig;
use worthit::types::report::OfferReport;
use worthit::types::scoring::{OfferKind, ScoreResult, Verdict};
use worthit::{config, telemetry};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID: i32 = 1;
    pub const SKIP: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, WorthItError> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let config::LoadedConfig {
        config: loaded,
        layers,
    } = config::load_config(&cwd, cli.config.as_deref())?;
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        loaded.log_level(),
    ))?;
    for layer in &layers {
        debug!(path = %layer.display(), "merged config layer");
    }
    debug!(layers = layers.len(), "configuration loaded");

    match cli.command {
        Commands::Shopping(cmd) => {
            let result = engine::calc_shopping_score(&cmd.input(), &loaded.shopping_options());
            emit(result, &loaded, cmd.output)
        }
        Commands::Pickup(cmd) => {
            let result = engine::calc_pickup_score(&cmd.input(), &loaded.pickup_options());
            emit(result, &loaded, cmd.output)
        }
        Commands::Target(cmd) => {
            let map = match OfferKind::from(cmd.kind) {
                OfferKind::Shopping => loaded.shopping.resolve().rate_map(),
                OfferKind::Pickup => loaded.pickup.resolve().rate_map(),
            };
            let eq_mi = engine::normalize::parse_number(&cmd.eq_mi);
            let target = engine::normalize::parse_number(&cmd.score);
            let payout = payout_for_target_score(eq_mi, target, map);
            println!("{payout:.2}");
            Ok(exit_code::SUCCESS)
        }
        Commands::Weigh(cmd) => {
            let weighted =
                engine::weighted_quantity(&cmd.qty.breakdown(), &loaded.multipliers.resolve());
            println!("{weighted:.2}");
            Ok(exit_code::SUCCESS)
        }
        Commands::Defaults => {
            print!("{}", toml::to_string(&loaded.effective())?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn emit(
    result: ScoreResult,
    loaded: &WorthItConfig,
    output: cli::OutputArgs,
) -> Result<i32, WorthItError> {
    let offer_report = OfferReport::new(result, &loaded.target_scores());
    let format = match output.format {
        cli::ReportFormat::Text => OutputFormat::Text,
        cli::ReportFormat::Md => OutputFormat::Md,
        cli::ReportFormat::Json => OutputFormat::Json,
    };
    println!("{}", report::render(&offer_report, format)?);

    if !result.valid {
        warn!("equivalent miles is 0 or less; score is not meaningful");
        Ok(exit_code::INVALID)
    } else if output.strict && result.verdict == Verdict::Skip {
        Ok(exit_code::SKIP)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
