#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Geography analytics payload DTOs.
//!
//! The analytics API has shipped two shapes for per-country request counts:
//! the current one nests them under `sum.requests`, the legacy one exposes a
//! flat `count`. Both decode into [`GeographyEntry`], and
//! [`GeographyEntry::normalize`] is the single adapter that turns either shape
//! into a [`GeoSample`].
//!
//! Decoding is lenient below the top level: collections that are missing or
//! not arrays decode as empty, and elements that fail to decode are dropped.
//! Only a top level that is not an array is reported as a [`SchemaError`].

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Country label the API uses when geolocation failed.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Errors raised while decoding a geography payload.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The top-level payload was not a JSON array of accounts.
    #[error("geography payload must be an array of accounts, found {found}")]
    NotAnArray {
        /// JSON kind that was found instead.
        found: &'static str,
    },
    /// The raw payload was not valid JSON.
    #[error("geography payload is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// One account and the zones it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountGeography {
    /// Zones reported for the account.
    #[serde(default, deserialize_with = "lenient_list")]
    pub zones: Vec<ZoneGeography>,
}

/// One zone and its geography breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ZoneGeography {
    /// Per-country rows for the zone.
    #[serde(default, deserialize_with = "lenient_list")]
    pub geography: Vec<GeographyEntry>,
}

/// Raw per-country row in either the current or the legacy schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeographyEntry {
    /// Dimension labels attached to the row.
    #[serde(default, deserialize_with = "lenient_option")]
    pub dimensions: Option<GeoDimensions>,
    /// Nested metric summary (current schema).
    #[serde(default, deserialize_with = "lenient_option")]
    pub sum: Option<GeoSummary>,
    /// Flat request count (legacy schema).
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<u64>,
}

/// Dimension labels of a geography row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoDimensions {
    /// Client country name as reported by the edge.
    #[serde(default, deserialize_with = "lenient_name")]
    pub client_country_name: Option<String>,
}

/// Nested metrics of a geography row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct GeoSummary {
    /// Request count.
    #[serde(default, deserialize_with = "lenient_count")]
    pub requests: Option<u64>,
    /// Transferred bytes.
    #[serde(default, deserialize_with = "lenient_count")]
    pub bytes: Option<u64>,
    /// Threats mitigated.
    #[serde(default, deserialize_with = "lenient_count")]
    pub threats: Option<u64>,
}

/// Which schema revision carried the request count of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoSchema {
    /// `sum.requests` holds a non-zero count.
    Summary,
    /// Only the legacy flat `count` holds a non-zero count.
    LegacyCount,
    /// Neither field carries a count.
    Empty,
}

/// Normalized per-country sample produced by the schema adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoSample {
    /// Accepted country name.
    pub country: String,
    /// Request count.
    pub requests: u64,
    /// Transferred bytes.
    pub bytes: u64,
    /// Threats mitigated.
    pub threats: u64,
}

impl GeographyEntry {
    /// Country name if it is present, non-empty and not the unknown marker.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.dimensions
            .as_ref()
            .and_then(|dims| dims.client_country_name.as_deref())
            .filter(|name| !name.is_empty() && *name != UNKNOWN_COUNTRY)
    }

    /// Classify which schema revision supplies the request count.
    #[must_use]
    pub fn schema(&self) -> GeoSchema {
        if self.summary_requests().is_some() {
            GeoSchema::Summary
        } else if self.count.is_some_and(|count| count > 0) {
            GeoSchema::LegacyCount
        } else {
            GeoSchema::Empty
        }
    }

    /// Request count, preferring the nested summary over the legacy field.
    #[must_use]
    pub fn requests(&self) -> u64 {
        match self.schema() {
            GeoSchema::Summary => self.summary_requests().unwrap_or_default(),
            GeoSchema::LegacyCount => self.count.unwrap_or_default(),
            GeoSchema::Empty => 0,
        }
    }

    /// Normalize the row into a [`GeoSample`], or `None` when its country is rejected.
    #[must_use]
    pub fn normalize(&self) -> Option<GeoSample> {
        let country = self.country()?;
        let sum = self.sum.unwrap_or_default();
        Some(GeoSample {
            country: country.to_string(),
            requests: self.requests(),
            bytes: sum.bytes.unwrap_or(0),
            threats: sum.threats.unwrap_or(0),
        })
    }

    fn summary_requests(&self) -> Option<u64> {
        self.sum
            .and_then(|sum| sum.requests)
            .filter(|requests| *requests > 0)
    }
}

/// Decoded top-level geography payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeographyPayload {
    /// Accounts in payload order.
    pub accounts: Vec<AccountGeography>,
}

impl GeographyPayload {
    /// Decode an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns [`SchemaError::NotAnArray`] when the value is not an array.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let Value::Array(items) = value else {
            return Err(SchemaError::NotAnArray {
                found: json_kind(value),
            });
        };
        let accounts = items
            .iter()
            .filter_map(|item| AccountGeography::deserialize(item).ok())
            .collect();
        Ok(Self { accounts })
    }

    /// Parse and decode a raw JSON document.
    ///
    /// # Errors
    /// Returns [`SchemaError::Json`] for invalid JSON and
    /// [`SchemaError::NotAnArray`] when the document is not an array.
    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).ok())
    } else {
        Ok(None)
    }
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => Some(name),
        _ => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_from_value(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|float| float.is_finite() && *float >= 0.0)
            .map(|float| float as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: &Value) -> GeographyEntry {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    #[test]
    fn summary_schema_wins_over_legacy_count() {
        let row = entry(&json!({
            "dimensions": { "clientCountryName": "DE" },
            "sum": { "requests": 12, "bytes": 400 },
            "count": 99
        }));
        assert_eq!(row.schema(), GeoSchema::Summary);
        assert_eq!(row.requests(), 12);
    }

    #[test]
    fn legacy_count_used_when_summary_requests_missing_or_zero() {
        let missing = entry(&json!({
            "dimensions": { "clientCountryName": "FR" },
            "count": 7
        }));
        assert_eq!(missing.schema(), GeoSchema::LegacyCount);
        assert_eq!(missing.requests(), 7);

        let zero = entry(&json!({
            "dimensions": { "clientCountryName": "FR" },
            "sum": { "requests": 0, "bytes": 10 },
            "count": 3
        }));
        assert_eq!(zero.schema(), GeoSchema::LegacyCount);
        let sample = zero.normalize().expect("country accepted");
        assert_eq!(sample.requests, 3);
        assert_eq!(sample.bytes, 10);
    }

    #[test]
    fn empty_schema_yields_zero_requests() {
        let row = entry(&json!({ "dimensions": { "clientCountryName": "JP" } }));
        assert_eq!(row.schema(), GeoSchema::Empty);
        let sample = row.normalize().expect("country accepted");
        assert_eq!(
            sample,
            GeoSample {
                country: "JP".to_string(),
                requests: 0,
                bytes: 0,
                threats: 0,
            }
        );
    }

    #[test]
    fn rejected_country_names_do_not_normalize() {
        for value in [
            json!({ "dimensions": { "clientCountryName": "Unknown" }, "count": 1 }),
            json!({ "dimensions": { "clientCountryName": "" }, "count": 1 }),
            json!({ "dimensions": {}, "count": 1 }),
            json!({ "count": 1 }),
            json!({ "dimensions": { "clientCountryName": 42 }, "count": 1 }),
        ] {
            assert!(entry(&value).normalize().is_none(), "{value}");
        }
    }

    #[test]
    fn float_counts_truncate_and_negatives_are_ignored() {
        assert_eq!(count_from_value(&json!(12.9)), Some(12));
        assert_eq!(count_from_value(&json!(-4)), None);
        assert_eq!(count_from_value(&json!("12")), None);
    }

    #[test]
    fn non_array_top_level_reports_kind() {
        let err = GeographyPayload::from_value(&json!({ "zones": [] })).unwrap_err();
        assert!(matches!(err, SchemaError::NotAnArray { found: "object" }));
        let err = GeographyPayload::from_value(&Value::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "geography payload must be an array of accounts, found null"
        );
    }

    #[test]
    fn malformed_nested_collections_decode_empty() {
        let payload = GeographyPayload::from_value(&json!([
            { "zones": "nope" },
            { "zones": [ { "geography": null }, { "geography": 3 }, "zone" ] },
            null,
            {}
        ]))
        .expect("array payload");
        assert_eq!(payload.accounts.len(), 3);
        assert!(payload.accounts[0].zones.is_empty());
        assert_eq!(payload.accounts[1].zones.len(), 2);
        assert!(
            payload.accounts[1]
                .zones
                .iter()
                .all(|zone| zone.geography.is_empty())
        );
    }
}
