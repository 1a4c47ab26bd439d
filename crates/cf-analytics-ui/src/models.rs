//! View labels and demo payloads used by the UI shell.

use crate::core::breakpoints::Layout;
use crate::i18n::{TextKey, TranslationBundle};
use serde_json::{Value, json};

/// Localized copy for the geography block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeographyLabels {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Empty-state message.
    pub no_data: String,
    /// Chart heading.
    pub traffic_by_country: String,
    /// Table heading.
    pub detailed_stats: String,
    /// Requests series name.
    pub requests: String,
    /// Bandwidth series name.
    pub bandwidth: String,
    /// Map legend caption.
    pub map_legend: String,
}

impl GeographyLabels {
    /// Resolve every label from `bundle`.
    #[must_use]
    pub fn from_bundle(bundle: &TranslationBundle) -> Self {
        Self {
            title: bundle.text(TextKey::GeographyTitle),
            subtitle: bundle.text(TextKey::GeographySubtitle),
            no_data: bundle.text(TextKey::NoGeographyData),
            traffic_by_country: bundle.text(TextKey::TrafficByCountry),
            detailed_stats: bundle.text(TextKey::DetailedStats),
            requests: bundle.text(TextKey::Requests),
            bandwidth: bundle.text(TextKey::Bandwidth),
            map_legend: bundle.text(TextKey::MapLegend),
        }
    }
}

/// Column headers of the ranked country table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableHeaders {
    /// Rank column.
    pub rank: String,
    /// Country column.
    pub country: String,
    /// Requests column.
    pub requests: String,
    /// Bandwidth column.
    pub bandwidth: String,
}

impl TableHeaders {
    /// Full headers on desktop, abbreviated ones on mobile.
    #[must_use]
    pub fn for_layout(bundle: &TranslationBundle, layout: Layout) -> Self {
        let rank = bundle.text(TextKey::Rank);
        if layout.is_mobile() {
            Self {
                rank,
                country: bundle.text(TextKey::CountryShort),
                requests: bundle.text(TextKey::RequestsShort),
                bandwidth: bundle.text(TextKey::BandwidthShort),
            }
        } else {
            Self {
                rank,
                country: bundle.text(TextKey::CountryRegion),
                requests: bundle.text(TextKey::Requests),
                bandwidth: bundle.text(TextKey::Bandwidth),
            }
        }
    }
}

/// Demo analytics payload rendered until a data source is wired in.
///
/// Mixes both count schemas and a few rows the aggregator must drop.
#[must_use]
pub fn demo_payload() -> Value {
    json!([
        {
            "accountTag": "acct-primary",
            "zones": [
                {
                    "zoneTag": "example.com",
                    "geography": [
                        { "dimensions": { "clientCountryName": "US" }, "sum": { "requests": 182_340, "bytes": 9_412_880_113_u64, "threats": 412 } },
                        { "dimensions": { "clientCountryName": "CN" }, "sum": { "requests": 96_120, "bytes": 3_118_004_771_u64, "threats": 97 } },
                        { "dimensions": { "clientCountryName": "DE" }, "sum": { "requests": 41_876, "bytes": 1_904_332_018_u64, "threats": 12 } },
                        { "dimensions": { "clientCountryName": "Unknown" }, "sum": { "requests": 3_210, "bytes": 88_104_223 } }
                    ]
                },
                {
                    "zoneTag": "example.org",
                    "geography": [
                        { "dimensions": { "clientCountryName": "US" }, "sum": { "requests": 22_015, "bytes": 640_118_302 } },
                        { "dimensions": { "clientCountryName": "JP" }, "sum": { "requests": 38_450, "bytes": 1_220_940_557_u64, "threats": 5 } },
                        { "dimensions": { "clientCountryName": "GB" }, "sum": { "requests": 27_903, "bytes": 990_221_474 } }
                    ]
                }
            ]
        },
        {
            "accountTag": "acct-legacy",
            "zones": [
                {
                    "zoneTag": "legacy.example.net",
                    "geography": [
                        { "dimensions": { "clientCountryName": "BR" }, "count": 19_044 },
                        { "dimensions": { "clientCountryName": "CN" }, "count": 8_310 },
                        { "dimensions": { "clientCountryName": "FR" }, "count": 12_580 },
                        { "dimensions": { "clientCountryName": "" }, "count": 440 }
                    ]
                }
            ]
        }
    ])
}
