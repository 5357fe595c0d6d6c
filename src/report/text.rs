use crate::report::{money, INVALID_NOTICE};
use crate::types::report::OfferReport;
use crate::types::scoring::OfferInputs;

pub fn to_text(report: &OfferReport) -> String {
    let result = &report.result;
    let mut lines = vec![format!("{} offer", result.kind.label())];

    if !result.valid {
        lines.push(INVALID_NOTICE.to_string());
        return lines.join("\n");
    }

    lines.push(row("score:", format!("{} {}", result.score, result.verdict)));
    lines.push(row("payout:", money(result.inputs.payout())));
    match &result.inputs {
        OfferInputs::Shopping(inputs) => {
            lines.push(row(
                "out/back:",
                format!("{:.2} / {:.2} mi", inputs.d_out, inputs.d_back),
            ));
            lines.push(row("customers:", inputs.customers));
            lines.push(row("items:", inputs.item_count));
        }
        OfferInputs::Pickup(inputs) => {
            lines.push(row(
                "route/back:",
                format!("{:.2} / {:.2} mi", inputs.d_route, inputs.d_back),
            ));
            lines.push(row("stops:", inputs.stops));
        }
    }

    let breakdown = &result.breakdown;
    lines.push(row("weighted:", format!("{:.2}", breakdown.weighted_qty)));
    if let Some(item_effort) = breakdown.item_effort {
        lines.push(row("picking:", format!("{item_effort:.2} eq-mi")));
    }
    lines.push(row("eq-mi:", format!("{:.2}", breakdown.eq_mi)));
    lines.push(row("rate:", format!("{}/eq-mi", money(breakdown.rate))));

    for target in &report.targets {
        lines.push(format!(
            "target {} -> need about {}",
            target.score,
            money(target.payout)
        ));
    }
    lines.join("\n")
}

/// Label column wide enough for the longest label, `route/back:`.
const LABEL_WIDTH: usize = 11;

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label:<LABEL_WIDTH$} {value}")
}
