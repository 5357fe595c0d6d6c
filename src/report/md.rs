use crate::report::{money, INVALID_NOTICE};
use crate::types::report::OfferReport;
use crate::types::scoring::OfferInputs;

pub fn to_markdown(report: &OfferReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str(&format!("# {} Offer\n\n", result.kind.label()));

    if !result.valid {
        output.push_str(&format!("> {INVALID_NOTICE}\n"));
        return output;
    }

    output.push_str(&format!(
        "**Score: {} ({})**\n\n",
        result.score, result.verdict
    ));

    output.push_str("## Inputs\n\n");
    output.push_str(&format!("- payout: {}\n", money(result.inputs.payout())));
    match &result.inputs {
        OfferInputs::Shopping(inputs) => {
            output.push_str(&format!(
                "- out / back: {:.2} / {:.2} mi\n- customers: {}\n- item count: {}\n",
                inputs.d_out, inputs.d_back, inputs.customers, inputs.item_count
            ));
        }
        OfferInputs::Pickup(inputs) => {
            output.push_str(&format!(
                "- route / back: {:.2} / {:.2} mi\n- stops: {}\n",
                inputs.d_route, inputs.d_back, inputs.stops
            ));
        }
    }
    output.push('\n');

    let breakdown = &result.breakdown;
    output.push_str("## Breakdown\n\n");
    output.push_str("| quantity | value |\n|---|---|\n");
    output.push_str(&format!("| total units | {:.2} |\n", breakdown.total_units));
    output.push_str(&format!("| weighted qty | {:.2} |\n", breakdown.weighted_qty));
    if let Some(item_effort) = breakdown.item_effort {
        output.push_str(&format!("| item effort | {item_effort:.2} eq-mi |\n"));
    }
    output.push_str(&format!("| equivalent miles | {:.2} |\n", breakdown.eq_mi));
    output.push_str(&format!("| rate | {}/eq-mi |\n\n", money(breakdown.rate)));

    output.push_str("## Targets\n\n");
    if report.targets.is_empty() {
        output.push_str("- none\n");
    } else {
        for target in &report.targets {
            output.push_str(&format!(
                "- score {}: need about {}\n",
                target.score,
                money(target.payout)
            ));
        }
    }
    let map = result.rate_map();
    output.push_str(&format!(
        "\nRate map: R_BAD={:.2} -> R_GREAT={:.2}\n",
        map.r_bad, map.r_great
    ));

    output
}
