//! End-to-end tests through the harness.
//!
//! JSON bid set -> intake -> both mechanisms -> JSON report, plus the canned
//! suites and their findings.

use rust_decimal::Decimal;
use serde_json::Value;
use slotauction_harness::*;
use slotauction_types::{AuctionError, MechanismConfig, TieBreak};

/// Helper: the whole `slotauction run` pipeline minus argument parsing.
fn run_document(doc: &str, config: HarnessConfig) -> Result<Value, AuctionError> {
    let intake = BidIntake::new(config.mechanism);
    let bids = read_bid_set(doc.as_bytes(), &intake)?;
    let report = run_experiment("e2e", &bids, config.mechanism)?;
    let mut out = Vec::new();
    write_json(&mut out, &report, config.pretty)?;
    Ok(serde_json::from_slice(&out)?)
}

#[test]
fn json_in_report_out() {
    let doc = r#"{"bids": [
        {"bidder_id": "A1", "value": 100, "space_type": "b"},
        {"bidder_id": "B1", "value": 60,  "space_type": "t"},
        {"bidder_id": "C1", "value": 50,  "space_type": "s"},
        {"bidder_id": "D1", "value": 80,  "space_type": "b"}
    ]}"#;
    let report = run_document(doc, HarnessConfig::default()).unwrap();

    assert_eq!(report["name"], "e2e");
    assert_eq!(report["bids"].as_array().map(Vec::len), Some(4));
    assert_eq!(report["vcg"]["allocation"]["top"], "B1");
    assert_eq!(report["vcg"]["allocation"]["sidebar"], "C1");
    assert_eq!(report["vcg"]["welfare"], 110.0);
    assert_eq!(report["vcg"]["payments"]["B1"], 50.0);
    assert_eq!(report["vcg"]["payments"]["C1"], 40.0);
    assert_eq!(report["vcg"]["total_revenue"], 90.0);
    assert_eq!(report["spa"]["winner"], "A1");
    assert_eq!(report["spa"]["payment"], 80.0);
    assert_eq!(report["digest"].as_str().map(str::len), Some(64));
}

#[test]
fn string_values_are_accepted() {
    let doc = r#"{"bids": [
        {"bidder_id": "A1", "value": "150.5", "space_type": "b"},
        {"bidder_id": "B1", "value": "100", "space_type": "b"}
    ]}"#;
    let report = run_document(doc, HarnessConfig::default()).unwrap();
    assert_eq!(report["vcg"]["payments"]["A1"], 100.0);
    assert_eq!(report["bids"][0]["value"], 150.5);
}

#[test]
fn invalid_documents_are_rejected() {
    let negative = r#"{"bids": [{"bidder_id": "A1", "value": -1, "space_type": "t"}]}"#;
    let err = run_document(negative, HarnessConfig::default()).unwrap_err();
    assert!(matches!(err, AuctionError::InvalidBidValue { .. }));

    let oversized = r#"{"bids": [
        {"bidder_id": "A1", "value": "5e28", "space_type": "t"},
        {"bidder_id": "B1", "value": "5e28", "space_type": "s"}
    ]}"#;
    let err = run_document(oversized, HarnessConfig::default()).unwrap_err();
    assert!(matches!(err, AuctionError::InvalidBidValue { .. }));
    assert!(format!("{err}").starts_with("SA_ERR_101"));

    let unknown = r#"{"bids": [{"bidder_id": "A1", "value": 10, "space_type": "both"}]}"#;
    let err = run_document(unknown, HarnessConfig::default()).unwrap_err();
    assert!(matches!(err, AuctionError::InvalidSpaceType { .. }));
    assert!(format!("{err}").starts_with("SA_ERR_100"));
}

#[test]
fn duplicate_identity_depends_on_config() {
    let doc = r#"{"bids": [
        {"bidder_id": "A1", "value": 60, "space_type": "t"},
        {"bidder_id": "A1", "value": 50, "space_type": "s"},
        {"bidder_id": "B1", "value": 40, "space_type": "b"}
    ]}"#;
    let err = run_document(doc, HarnessConfig::default()).unwrap_err();
    assert!(matches!(err, AuctionError::DuplicateBidder(_)));

    let config = HarnessConfig::from_json_str(
        r#"{"mechanism": {"enforce_unique_bidders": false}, "pretty": false}"#,
    )
    .unwrap();
    let report = run_document(doc, config).unwrap();
    // A1 holds both slots via two bids; excluding A1 leaves B1's 40.
    assert_eq!(report["vcg"]["allocation"]["top"], "A1");
    assert_eq!(report["vcg"]["allocation"]["sidebar"], "A1");
    assert_eq!(report["vcg"]["payments"]["A1"], 40.0);
}

#[test]
fn tie_break_config_reaches_the_engines() {
    let doc = r#"{"bids": [
        {"bidder_id": "B1", "value": 100, "space_type": "b"},
        {"bidder_id": "A1", "value": 100, "space_type": "b"}
    ]}"#;
    let by_order = run_document(doc, HarnessConfig::default()).unwrap();
    assert_eq!(by_order["spa"]["winner"], "B1");
    assert_eq!(by_order["vcg"]["allocation"]["top"], "B1");

    let config = HarnessConfig {
        mechanism: MechanismConfig::default().with_tie_break(TieBreak::BidderIdAscending),
        pretty: false,
    };
    let by_id = run_document(doc, config).unwrap();
    assert_eq!(by_id["spa"]["winner"], "A1");
    assert_eq!(by_id["spa"]["payment"], 100.0);
    assert_eq!(by_id["vcg"]["allocation"]["top"], "A1");
}

#[test]
fn empty_document_reports_without_second_price() {
    let report = run_document(r#"{"bids": []}"#, HarnessConfig::default()).unwrap();
    assert_eq!(report["vcg"]["allocation"]["top"], Value::Null);
    assert_eq!(report["vcg"]["welfare"], 0.0);
    assert_eq!(report["spa"], Value::Null);
    assert_eq!(report["revenue_ratio"], Value::Null);
}

#[test]
fn suite_and_findings() {
    let suite = run_all_scenarios(MechanismConfig::default()).unwrap();
    let findings = Findings::from_suite(&suite);

    assert_eq!(findings.original_vcg_revenue, Decimal::new(50, 0));
    assert_eq!(findings.sybil_vcg_revenue, Decimal::new(110, 0));
    assert_eq!(findings.true_value, Decimal::new(150, 0));
    assert_eq!(findings.truthful_payment, findings.overbid_payment);
    assert_eq!(findings.truthful_payment, findings.underbid_payment);

    let mut out = Vec::new();
    write_json(&mut out, &suite, false).unwrap();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["sybil_attack"]["sybil"]["vcg"]["total_revenue"], 110.0);
    assert_eq!(json["revenue_comparison"][0]["spa"]["payment"], 180.0);
    assert!(json["generated_at"].is_string());
}
