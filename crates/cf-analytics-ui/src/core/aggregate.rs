//! Per-country aggregation of geography analytics.
//!
//! # Design
//! - One pass over accounts → zones → rows; every row goes through the
//!   payload schema adapter before it is summed.
//! - Totals keep first-seen order so the descending sort is stable for ties.
//! - The map and the table read the same [`GeographySummary`].

use cf_analytics_api_models::{AccountGeography, GeographyPayload, SchemaError};
use serde_json::Value;
use std::collections::HashMap;

/// Number of countries shown in the chart and the ranked table.
pub const TOP_COUNTRIES: usize = 5;

/// Cumulative traffic for one country.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryAggregate {
    /// Country name as reported by the API.
    pub country: String,
    /// Total requests.
    pub requests: u64,
    /// Total transferred bytes.
    pub bytes: u64,
    /// Total mitigated threats.
    pub threats: u64,
}

/// Sum every accepted geography row per country, sorted by requests (descending).
#[must_use]
pub fn aggregate_countries(accounts: &[AccountGeography]) -> Vec<CountryAggregate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<CountryAggregate> = Vec::new();

    let samples = accounts
        .iter()
        .flat_map(|account| account.zones.iter())
        .flat_map(|zone| zone.geography.iter())
        .filter_map(cf_analytics_api_models::GeographyEntry::normalize);

    for sample in samples {
        let slot = *index.entry(sample.country.clone()).or_insert_with(|| {
            totals.push(CountryAggregate {
                country: sample.country.clone(),
                ..CountryAggregate::default()
            });
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.requests = entry.requests.saturating_add(sample.requests);
        entry.bytes = entry.bytes.saturating_add(sample.bytes);
        entry.threats = entry.threats.saturating_add(sample.threats);
    }

    totals.sort_by(|a, b| b.requests.cmp(&a.requests));
    totals
}

/// Derived dataset shared by the chart, the map and the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeographySummary {
    /// Every country, sorted by requests (descending).
    pub countries: Vec<CountryAggregate>,
    /// Leading [`TOP_COUNTRIES`] entries of `countries`.
    pub top: Vec<CountryAggregate>,
    /// Requests of the busiest country, or 0 when empty.
    pub max_requests: u64,
    /// Requests summed over `top` only.
    pub total_requests: u64,
}

impl GeographySummary {
    /// Build the summary from decoded accounts.
    #[must_use]
    pub fn from_accounts(accounts: &[AccountGeography]) -> Self {
        let countries = aggregate_countries(accounts);
        let top: Vec<CountryAggregate> = countries.iter().take(TOP_COUNTRIES).cloned().collect();
        let max_requests = countries.first().map_or(0, |first| first.requests);
        let total_requests = top
            .iter()
            .fold(0u64, |sum, country| sum.saturating_add(country.requests));
        Self {
            countries,
            top,
            max_requests,
            total_requests,
        }
    }

    /// Build the summary from a raw payload value.
    ///
    /// A top level that is not an array yields an empty summary together with
    /// the schema error so the caller can report it.
    #[must_use]
    pub fn from_value(value: &Value) -> (Self, Option<SchemaError>) {
        match GeographyPayload::from_value(value) {
            Ok(payload) => (Self::from_accounts(&payload.accounts), None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Whether there is anything to chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Share of `requests` in the top-country total, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share_percent(&self, requests: u64) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            requests as f64 / self.total_requests as f64 * 100.0
        }
    }

    /// [`Self::share_percent`] with one decimal, e.g. `"42.5"`.
    ///
    /// Halves round up (`6.25` becomes `"6.3"`), unlike `{:.1}` alone.
    #[must_use]
    pub fn share_label(&self, requests: u64) -> String {
        let rounded = (self.share_percent(requests) * 10.0).round() / 10.0;
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(value: &Value) -> GeographySummary {
        let (summary, err) = GeographySummary::from_value(value);
        assert!(err.is_none(), "unexpected schema error: {err:?}");
        summary
    }

    fn row(country: &str, requests: u64, bytes: u64) -> Value {
        json!({
            "dimensions": { "clientCountryName": country },
            "sum": { "requests": requests, "bytes": bytes }
        })
    }

    #[test]
    fn single_country_end_to_end() {
        let summary = summary(&json!([{
            "zones": [{ "geography": [row("US", 100, 5000), row("US", 50, 1000)] }]
        }]));
        assert_eq!(
            summary.countries,
            vec![CountryAggregate {
                country: "US".to_string(),
                requests: 150,
                bytes: 6000,
                threats: 0,
            }]
        );
        assert_eq!(summary.max_requests, 150);
        assert_eq!(summary.total_requests, 150);
        assert_eq!(summary.share_label(150), "100.0");
    }

    #[test]
    fn sums_across_accounts_and_zones_without_duplicates() {
        let summary = summary(&json!([
            { "zones": [
                { "geography": [row("DE", 10, 1), row("FR", 30, 3)] },
                { "geography": [row("DE", 5, 2)] }
            ] },
            { "zones": [
                { "geography": [
                    row("FR", 1, 1),
                    { "dimensions": { "clientCountryName": "DE" }, "sum": { "requests": 1, "threats": 4 } }
                ] }
            ] }
        ]));
        assert_eq!(summary.countries.len(), 2);
        assert_eq!(summary.countries[0].country, "FR");
        assert_eq!(summary.countries[0].requests, 31);
        assert_eq!(summary.countries[0].bytes, 4);
        assert_eq!(summary.countries[1].country, "DE");
        assert_eq!(summary.countries[1].requests, 16);
        assert_eq!(summary.countries[1].bytes, 3);
        assert_eq!(summary.countries[1].threats, 4);
    }

    #[test]
    fn rejected_names_never_aggregate() {
        let summary = summary(&json!([{ "zones": [{ "geography": [
            row("", 10, 0),
            row("Unknown", 10, 0),
            { "sum": { "requests": 10 } },
            row("BR", 1, 0)
        ] }] }]));
        let names: Vec<&str> = summary.countries.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["BR"]);
    }

    #[test]
    fn legacy_count_rows_are_summed() {
        let summary = summary(&json!([{ "zones": [{ "geography": [
            { "dimensions": { "clientCountryName": "IN" }, "count": 8 },
            row("IN", 2, 100)
        ] }] }]));
        assert_eq!(summary.countries[0].requests, 10);
        assert_eq!(summary.countries[0].bytes, 100);
    }

    #[test]
    fn top_is_first_five_and_total_covers_top_only() {
        let rows: Vec<Value> = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .zip([70u64, 60, 50, 40, 30, 20, 10])
            .map(|(country, requests)| row(country, requests, 0))
            .collect();
        let summary = summary(&json!([{ "zones": [{ "geography": rows }] }]));
        assert_eq!(summary.countries.len(), 7);
        assert_eq!(summary.top.len(), TOP_COUNTRIES);
        assert_eq!(summary.top[..], summary.countries[..TOP_COUNTRIES]);
        assert_eq!(summary.max_requests, 70);
        assert_eq!(summary.total_requests, 250);
        assert_eq!(summary.share_label(70), "28.0");
        assert!(
            summary
                .countries
                .windows(2)
                .all(|pair| pair[0].requests >= pair[1].requests)
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let summary = summary(&json!([{ "zones": [{ "geography": [
            row("NL", 5, 0),
            row("BE", 5, 0),
            row("LU", 9, 0)
        ] }] }]));
        let names: Vec<&str> = summary.countries.iter().map(|c| c.country.as_str()).collect();
        assert_eq!(names, vec!["LU", "NL", "BE"]);
    }

    #[test]
    fn zero_totals_render_zero_share() {
        let summary = summary(&json!([{ "zones": [{ "geography": [row("CA", 0, 10)] }] }]));
        assert_eq!(summary.max_requests, 0);
        assert_eq!(summary.total_requests, 0);
        assert_eq!(summary.share_label(0), "0.0");
    }

    #[test]
    fn share_label_rounds_halves_up() {
        let summary = GeographySummary {
            total_requests: 16,
            ..GeographySummary::default()
        };
        assert_eq!(summary.share_label(1), "6.3");
        assert_eq!(summary.share_label(9), "56.3");
        assert_eq!(summary.share_label(16), "100.0");
    }

    #[test]
    fn malformed_top_level_degrades_to_empty() {
        let (summary, err) = GeographySummary::from_value(&json!({ "zones": [] }));
        assert!(summary.is_empty());
        assert_eq!(summary.max_requests, 0);
        assert!(err.is_some());

        let (summary, err) = GeographySummary::from_value(&Value::Null);
        assert!(summary.countries.is_empty());
        assert!(err.is_some());
    }

    #[test]
    fn empty_input_has_zero_maximum() {
        let summary = GeographySummary::from_accounts(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.max_requests, 0);
        assert_eq!(summary.share_percent(10), 0.0);
    }
}
