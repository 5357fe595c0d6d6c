use crate::types::report::OfferReport;

pub fn to_json(report: &OfferReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
