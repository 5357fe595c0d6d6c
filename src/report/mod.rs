pub mod json;
pub mod md;
pub mod text;

use crate::error::WorthItError;
use crate::types::report::OfferReport;

pub const INVALID_NOTICE: &str = "Check inputs: equivalent miles came out as 0 or less.";

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

pub fn render(report: &OfferReport, format: OutputFormat) -> Result<String, WorthItError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(WorthItError::Json),
    }
}

pub(crate) fn money(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::engine::{calc_shopping_score, QuantityBreakdown};
    use crate::types::config::ShoppingOptions;
    use crate::types::report::OfferReport;
    use crate::types::scoring::ShoppingInput;

    pub fn shopping_report() -> OfferReport {
        let input = ShoppingInput {
            payout: 24.95,
            d_out: 5.8,
            d_back: 5.8,
            customers: 2.0,
            item_count: 12.0,
            qty: QuantityBreakdown::light(16.0),
        };
        OfferReport::new(
            calc_shopping_score(&input, &ShoppingOptions::default()),
            &[60, 75],
        )
    }

    pub fn invalid_report() -> OfferReport {
        let input = ShoppingInput {
            payout: 10.0,
            customers: 1.0,
            ..ShoppingInput::default()
        };
        OfferReport::new(
            calc_shopping_score(&input, &ShoppingOptions::default()),
            &[60, 75],
        )
    }
}
