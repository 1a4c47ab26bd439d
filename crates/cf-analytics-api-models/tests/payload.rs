use cf_analytics_api_models::{GeoSample, GeoSchema, GeographyPayload, SchemaError};

const MIXED_SCHEMA_PAYLOAD: &str = r#"[
  {
    "accountTag": "acc-1",
    "zones": [
      {
        "zoneTag": "zone-a",
        "geography": [
          { "dimensions": { "clientCountryName": "US" }, "sum": { "requests": 100, "bytes": 5000, "threats": 2 } },
          { "dimensions": { "clientCountryName": "CN" }, "count": 40 },
          { "dimensions": { "clientCountryName": "Unknown" }, "sum": { "requests": 900 } }
        ]
      }
    ]
  },
  { "accountTag": "acc-2" }
]"#;

#[test]
fn mixed_schema_document_decodes_every_row() -> anyhow::Result<()> {
    let payload = GeographyPayload::from_json(MIXED_SCHEMA_PAYLOAD)?;
    assert_eq!(payload.accounts.len(), 2);
    assert!(payload.accounts[1].zones.is_empty());

    let rows = &payload.accounts[0].zones[0].geography;
    let schemas: Vec<GeoSchema> = rows.iter().map(|row| row.schema()).collect();
    assert_eq!(
        schemas,
        vec![GeoSchema::Summary, GeoSchema::LegacyCount, GeoSchema::Summary]
    );

    let samples: Vec<GeoSample> = rows.iter().filter_map(|row| row.normalize()).collect();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].country, "US");
    assert_eq!(samples[0].threats, 2);
    assert_eq!(samples[1].country, "CN");
    assert_eq!(samples[1].requests, 40);
    assert_eq!(samples[1].bytes, 0);
    Ok(())
}

#[test]
fn invalid_json_is_reported_as_json_error() {
    let err = GeographyPayload::from_json("[{").unwrap_err();
    assert!(matches!(err, SchemaError::Json(_)));
}

#[test]
fn scalar_document_is_not_an_array() {
    let err = GeographyPayload::from_json("\"accounts\"").unwrap_err();
    assert!(matches!(err, SchemaError::NotAnArray { found: "string" }));
}
