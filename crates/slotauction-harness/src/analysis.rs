//! Key findings extracted from a suite run.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::SuiteReport;

/// Headline numbers of a [`SuiteReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Findings {
    pub original_vcg_revenue: Decimal,
    pub sybil_vcg_revenue: Decimal,
    /// Over the revenue-comparison cases with positive VCG revenue.
    pub min_revenue_ratio: Option<f64>,
    pub avg_revenue_ratio: Option<f64>,
    pub true_value: Decimal,
    pub truthful_payment: Option<Decimal>,
    pub overbid_payment: Option<Decimal>,
    pub underbid_payment: Option<Decimal>,
}

impl Findings {
    #[must_use]
    pub fn from_suite(suite: &SuiteReport) -> Self {
        let ratios: Vec<f64> = suite
            .revenue_comparison
            .iter()
            .filter_map(|report| report.revenue_ratio)
            .collect();

        let min_revenue_ratio = ratios.iter().copied().reduce(f64::min);
        #[allow(clippy::cast_precision_loss)]
        let avg_revenue_ratio =
            (!ratios.is_empty()).then(|| ratios.iter().sum::<f64>() / ratios.len() as f64);

        let truthful = &suite.truthful_bidding;
        Self {
            original_vcg_revenue: suite.sybil_attack.original.vcg.total_revenue,
            sybil_vcg_revenue: suite.sybil_attack.sybil.vcg.total_revenue,
            min_revenue_ratio,
            avg_revenue_ratio,
            true_value: truthful.true_value,
            truthful_payment: truthful.truthful.spa_payment(),
            overbid_payment: truthful.overbid.spa_payment(),
            underbid_payment: truthful.underbid.spa_payment(),
        }
    }

    /// Returns `true` if splitting identities changed VCG revenue.
    #[must_use]
    pub fn sybil_changes_revenue(&self) -> bool {
        self.original_vcg_revenue != self.sybil_vcg_revenue
    }
}

fn show_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{r:.2}"))
}

fn show_amount(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| "n/a".to_string(), |a| a.normalize().to_string())
}

impl fmt::Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key Findings:")?;
        writeln!(f)?;
        writeln!(f, "1. Sybil Attack Analysis:")?;
        writeln!(f, "Original VCG Revenue: {}", self.original_vcg_revenue.normalize())?;
        writeln!(f, "Sybil Attack VCG Revenue: {}", self.sybil_vcg_revenue.normalize())?;
        writeln!(f)?;
        writeln!(f, "2. Revenue Comparison:")?;
        writeln!(f, "Minimum SPA/VCG Revenue Ratio: {}", show_ratio(self.min_revenue_ratio))?;
        writeln!(f, "Average SPA/VCG Revenue Ratio: {}", show_ratio(self.avg_revenue_ratio))?;
        writeln!(f)?;
        writeln!(f, "3. Truthful Bidding Analysis:")?;
        writeln!(f, "True Value: {}", self.true_value.normalize())?;
        writeln!(f, "Truthful Bid Payment: {}", show_amount(self.truthful_payment))?;
        writeln!(f, "Overbid Payment: {}", show_amount(self.overbid_payment))?;
        write!(f, "Underbid Payment: {}", show_amount(self.underbid_payment))
    }
}

#[cfg(test)]
mod tests {
    use slotauction_types::MechanismConfig;

    use super::*;
    use crate::run_all_scenarios;

    #[test]
    fn findings_from_reference_suite() {
        let findings = Findings::from_suite(&run_all_scenarios(MechanismConfig::default()).unwrap());

        assert_eq!(findings.original_vcg_revenue, Decimal::new(50, 0));
        assert_eq!(findings.sybil_vcg_revenue, Decimal::new(110, 0));
        assert!(findings.sybil_changes_revenue());

        // ratios: 180/190, 140/70, 90/155
        let min = findings.min_revenue_ratio.unwrap();
        assert!((min - 90.0 / 155.0).abs() < 1e-9);
        let avg = findings.avg_revenue_ratio.unwrap();
        let expected = (180.0 / 190.0 + 2.0 + 90.0 / 155.0) / 3.0;
        assert!((avg - expected).abs() < 1e-9);

        assert_eq!(findings.truthful_payment, Some(Decimal::new(100, 0)));
        assert_eq!(findings.overbid_payment, Some(Decimal::new(100, 0)));
        assert_eq!(findings.underbid_payment, Some(Decimal::new(100, 0)));
    }

    #[test]
    fn display_summary() {
        let findings = Findings::from_suite(&run_all_scenarios(MechanismConfig::default()).unwrap());
        let text = format!("{findings}");
        assert!(text.starts_with("Key Findings:"));
        assert!(text.contains("Original VCG Revenue: 50"));
        assert!(text.contains("Sybil Attack VCG Revenue: 110"));
        assert!(text.contains("Minimum SPA/VCG Revenue Ratio: 0.58"));
        assert!(text.contains("True Value: 150"));
        assert!(text.contains("Overbid Payment: 100"));
    }
}
