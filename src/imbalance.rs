//! Electricity imbalance estimate for a generating plant with a day-ahead forecast.
//!
//! Energy delivered inside the forecast band (±5 % of the average daily capacity) is paid
//! for; energy outside it is penalised at the same price. The share of energy inside the
//! band comes from integrating the normal distribution of daily capacity over the band.

use crate::math::constants::HOURS_PER_DAY;
use crate::math::gaussian::{self, CapacityRange};
use crate::types::{Entry, Report};
use serde::{Deserialize, Serialize};

/// Allowed forecast error as a fraction of the average daily capacity.
pub const FORECAST_ERROR_FRACTION: f64 = 0.05;

/// Inputs of the imbalance calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImbalanceInput {
    /// Average daily capacity Pc, MW.
    pub average_daily_capacity: f64,
    /// Electricity price, thousand UAH per MW·h.
    pub electricity_cost: f64,
    /// Standard deviation σ of the daily capacity, MW.
    pub standard_deviation: f64,
}

impl ImbalanceInput {
    /// The band inside which delivered energy carries no penalty.
    pub fn forecast_band(&self) -> CapacityRange {
        CapacityRange::around(self.average_daily_capacity, FORECAST_ERROR_FRACTION)
    }
}

/// Revenue, penalty and energy split of the imbalance calculation.
///
/// Field names serialize in PascalCase, which is what the form page reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImbalanceReport {
    pub profit: f64,
    pub electricity_no_imbalance: f64,
    pub penalty: f64,
    pub electricity_imbalance: f64,
    pub net_profit: f64,
    /// Share of energy inside the band, by 5-point quadrature.
    #[serde(skip)]
    pub balanced_share: f64,
    /// The same share from the closed-form normal CDF, for comparison only.
    #[serde(skip)]
    pub balanced_share_exact: f64,
}

/// Evaluates revenue and penalty for one day of generation.
pub fn evaluate(input: &ImbalanceInput) -> ImbalanceReport {
    let band = input.forecast_band();
    let capacity = input.average_daily_capacity;

    let balanced_share = gaussian::gauss_legendre_5(capacity, input.standard_deviation, band);
    let imbalanced_share = 1.0 - balanced_share;

    let electricity_no_imbalance = capacity * HOURS_PER_DAY * balanced_share;
    let electricity_imbalance = capacity * HOURS_PER_DAY * imbalanced_share;

    let profit = electricity_no_imbalance * input.electricity_cost;
    let penalty = electricity_imbalance * input.electricity_cost;

    ImbalanceReport {
        profit,
        electricity_no_imbalance,
        penalty,
        electricity_imbalance,
        net_profit: profit - penalty,
        balanced_share,
        balanced_share_exact: gaussian::exact_mass(capacity, input.standard_deviation, band),
    }
}

impl Report for ImbalanceReport {
    fn title(&self) -> &'static str {
        "Electricity Imbalance"
    }

    fn entries(&self) -> Vec<Entry> {
        vec![
            Entry::real("Profit", self.profit, "k UAH"),
            Entry::real("ElectricityNoImbalance", self.electricity_no_imbalance, "MW·h"),
            Entry::real("Penalty", self.penalty, "k UAH"),
            Entry::real("ElectricityImbalance", self.electricity_imbalance, "MW·h"),
            Entry::real("NetProfit", self.net_profit, "k UAH"),
        ]
    }

    fn diagnostics(&self) -> Vec<Entry> {
        vec![
            Entry::real("balancedShare", self.balanced_share, ""),
            Entry::real("balancedShareExact", self.balanced_share_exact, ""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plant(standard_deviation: f64) -> ImbalanceInput {
        ImbalanceInput {
            average_daily_capacity: 5.0,
            electricity_cost: 7.0,
            standard_deviation,
        }
    }

    #[test]
    fn test_wide_spread_forecast_runs_at_a_loss() {
        let report = evaluate(&plant(1.0));
        assert_relative_eq!(report.electricity_no_imbalance, 23.68951828337688, epsilon = 1e-9);
        assert_relative_eq!(report.electricity_imbalance, 96.31048171662312, epsilon = 1e-9);
        assert_relative_eq!(report.profit, 165.82662798363816, epsilon = 1e-9);
        assert_relative_eq!(report.penalty, 674.1733720163618, epsilon = 1e-9);
        assert_relative_eq!(report.net_profit, -508.3467440327236, epsilon = 1e-9);
    }

    #[test]
    fn test_tight_forecast_turns_a_profit() {
        let report = evaluate(&plant(0.25));
        assert_relative_eq!(report.electricity_no_imbalance, 81.92276871245365, epsilon = 1e-9);
        assert_relative_eq!(report.penalty, 266.5406190128245, epsilon = 1e-9);
        assert_relative_eq!(report.net_profit, 306.91876197435107, epsilon = 1e-9);
    }

    #[test]
    fn test_energy_split_covers_the_whole_day() {
        let report = evaluate(&plant(0.6));
        assert_relative_eq!(
            report.electricity_no_imbalance + report.electricity_imbalance,
            5.0 * 24.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(report.balanced_share, report.balanced_share_exact, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_std_dev_is_not_finite() {
        let report = evaluate(&plant(0.0));
        assert!(report.ensure_finite().is_err());
    }

    #[test]
    fn test_diagnostic_shares_do_not_fail_the_finite_check() {
        let report = ImbalanceReport {
            balanced_share_exact: f64::NAN,
            ..evaluate(&plant(1.0))
        };
        assert!(report.ensure_finite().is_ok());
        assert!(report.entries().iter().all(|e| !e.name.starts_with("balancedShare")));
        assert_eq!(report.diagnostics().len(), 2);
    }

    #[test]
    fn test_serializes_pascal_case_without_shares() {
        let json = serde_json::to_value(evaluate(&plant(1.0))).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["Profit", "ElectricityNoImbalance", "Penalty", "ElectricityImbalance", "NetProfit"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(keys.len(), 5);
    }
}
