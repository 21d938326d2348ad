//! Canned scenario suites.
//!
//! - **Sybil attack**: one bidder truthful vs. the same bidder split across
//!   two identities
//! - **Revenue comparison**: VCG vs. second-price revenue on three markets
//! - **Truthful bidding**: second-price payment when the top bidder bids its
//!   true value, overbids by 20%, or underbids by 20%

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use slotauction_types::{Bid, MechanismConfig, Result, SpaceType, constants};

use crate::{ExperimentReport, run_experiment};

/// Truthful vs. split-identity runs of the same market.
#[derive(Debug, Clone, Serialize)]
pub struct SybilReport {
    pub original: ExperimentReport,
    pub sybil: ExperimentReport,
}

/// Second-price outcomes around one true value.
#[derive(Debug, Clone, Serialize)]
pub struct TruthfulReport {
    #[serde(with = "slotauction_types::serde_float")]
    pub true_value: Decimal,
    pub truthful: ExperimentReport,
    pub overbid: ExperimentReport,
    pub underbid: ExperimentReport,
}

/// Every scenario, as written by `slotauction suite`.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub engine: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub config: MechanismConfig,
    pub sybil_attack: SybilReport,
    pub revenue_comparison: Vec<ExperimentReport>,
    pub truthful_bidding: TruthfulReport,
}

fn bid(id: &str, value: Decimal, space_type: SpaceType) -> Bid {
    Bid::new(id, value, space_type)
}

fn amount(value: i64) -> Decimal {
    Decimal::new(value, 0)
}

/// `{A1:100/b, B1:80/t, C1:70/s}` vs `{A1:60/t, A2:50/s, B1:80/t, C1:70/s}`.
pub fn sybil_attack(config: MechanismConfig) -> Result<SybilReport> {
    let original = vec![
        bid("A1", amount(100), SpaceType::Both),
        bid("B1", amount(80), SpaceType::Top),
        bid("C1", amount(70), SpaceType::Sidebar),
    ];
    let sybil = vec![
        bid("A1", amount(60), SpaceType::Top),
        bid("A2", amount(50), SpaceType::Sidebar),
        bid("B1", amount(80), SpaceType::Top),
        bid("C1", amount(70), SpaceType::Sidebar),
    ];

    Ok(SybilReport {
        original: run_experiment("Sybil Attack - Original", &original, config)?,
        sybil: run_experiment("Sybil Attack - Split Identity", &sybil, config)?,
    })
}

/// Three markets: joint-heavy, split-optimal, mixed preferences.
pub fn revenue_comparison(config: MechanismConfig) -> Result<Vec<ExperimentReport>> {
    let cases: [(&str, Vec<Bid>); 3] = [
        (
            "High Value Both Slots",
            vec![
                bid("A1", amount(200), SpaceType::Both),
                bid("B1", amount(180), SpaceType::Both),
                bid("C1", amount(100), SpaceType::Top),
                bid("D1", amount(90), SpaceType::Sidebar),
            ],
        ),
        (
            "Split Allocation Optimal",
            vec![
                bid("A1", amount(120), SpaceType::Top),
                bid("B1", amount(110), SpaceType::Sidebar),
                bid("C1", amount(150), SpaceType::Both),
                bid("D1", amount(140), SpaceType::Both),
            ],
        ),
        (
            "Mixed Preferences",
            vec![
                bid("A1", amount(90), SpaceType::Top),
                bid("B1", amount(85), SpaceType::Sidebar),
                bid("C1", amount(160), SpaceType::Both),
                bid("D1", amount(80), SpaceType::Top),
                bid("E1", amount(75), SpaceType::Sidebar),
            ],
        ),
    ];

    cases
        .iter()
        .map(|(name, bids)| run_experiment(name, bids, config))
        .collect()
}

/// The top bidder at its true value, at 120% and at 80%.
pub fn truthful_bidding(config: MechanismConfig) -> Result<TruthfulReport> {
    let true_value = amount(150);
    let market = |a1_value: Decimal| {
        vec![
            bid("A1", a1_value, SpaceType::Both),
            bid("B1", amount(100), SpaceType::Both),
            bid("C1", amount(80), SpaceType::Top),
        ]
    };

    Ok(TruthfulReport {
        true_value,
        truthful: run_experiment("Truthful Bidding", &market(true_value), config)?,
        overbid: run_experiment(
            "Overbidding",
            &market(true_value * Decimal::new(12, 1)),
            config,
        )?,
        underbid: run_experiment(
            "Underbidding",
            &market(true_value * Decimal::new(8, 1)),
            config,
        )?,
    })
}

/// Run every suite.
pub fn run_all_scenarios(config: MechanismConfig) -> Result<SuiteReport> {
    Ok(SuiteReport {
        engine: constants::ENGINE_NAME.to_string(),
        version: constants::VERSION.to_string(),
        generated_at: Utc::now(),
        config,
        sybil_attack: sybil_attack(config)?,
        revenue_comparison: revenue_comparison(config)?,
        truthful_bidding: truthful_bidding(config)?,
    })
}
