use chrono::NaiveDate;
use epc_advisor::property::EpcRating;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_rating(raw: &str) -> Result<EpcRating, String> {
    EpcRating::parse(raw).ok_or_else(|| format!("'{raw}' is not an EPC rating between A and G"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_values() {
        assert_eq!(parse_rating(" c "), Ok(EpcRating::C));
        assert!(parse_rating("unknown").is_err());
        assert_eq!(
            parse_date("2025-12-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date"))
        );
        assert!(parse_date("01/12/2025").is_err());
    }
}
