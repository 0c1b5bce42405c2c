//! Integration tests that run fixture request files through the full
//! boundary path: read from disk, deserialize, assess, serialize.
//!
//! These complement the unit tests inside wire.rs (which all use inline
//! JSON values) by pinning the exact response shapes for the documented
//! request examples.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use assess_cli::app;
use assess_cli::wire::CalculationRequest;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn assess_fixture(name: &str) -> Value {
    let payload = std::fs::read_to_string(fixture_path(name))
        .expect("fixture file should be readable");
    let request: CalculationRequest =
        serde_json::from_str(&payload).expect("fixture should deserialize");
    let response = app::run_calculation(request).expect("assessment should succeed");
    serde_json::to_value(&response).expect("response should serialize")
}

#[test]
fn donation_over_cap_is_clamped_before_assessment() {
    let value = assess_fixture("request_donation_clamped.json");

    // Donation clamped to 100,000; taxable 340,000; bracket 2 owes 19,000.
    assert_eq!(
        value,
        json!({
            "tax": 19000.0,
            "taxLevel": [
                { "level": "0 - 150,000", "tax": 0.0 },
                { "level": "150,001 - 500,000", "tax": 19000.0 },
                { "level": "500,001 - 1,000,000", "tax": 0.0 },
                { "level": "1,000,001 - 2,000,000", "tax": 0.0 },
                { "level": "2,000,001 or more", "tax": 0.0 }
            ]
        })
    );
}

#[test]
fn each_allowance_is_capped_independently() {
    let value = assess_fixture("request_multiple_allowances.json");

    // K-receipt clamped to 50,000, donation kept; taxable 290,000.
    assert_eq!(
        value,
        json!({
            "tax": 14000.0,
            "taxLevel": [
                { "level": "0 - 150,000", "tax": 0.0 },
                { "level": "150,001 - 500,000", "tax": 14000.0 },
                { "level": "500,001 - 1,000,000", "tax": 0.0 },
                { "level": "1,000,001 - 2,000,000", "tax": 0.0 },
                { "level": "2,000,001 or more", "tax": 0.0 }
            ]
        })
    );
}

#[test]
fn excess_withholding_yields_bare_refund() {
    let value = assess_fixture("request_refund.json");

    // Computed tax 19,000 against 30,000 withheld; no breakdown on refunds.
    assert_eq!(value, json!({ "taxRefund": 11000.0 }));
}

#[test]
fn minimal_request_defaults_missing_fields() {
    let value = assess_fixture("request_minimal.json");

    // Taxable income is -60,000; all five brackets contribute zero.
    assert_eq!(value["tax"], json!(0.0));
    let levels = value["taxLevel"].as_array().expect("breakdown expected");
    assert_eq!(levels.len(), 5);
    assert!(levels.iter().all(|level| level["tax"] == json!(0.0)));
}
