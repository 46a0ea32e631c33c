use super::indicators::IndicatorTable;
use crate::error::CalcError;
use crate::math::constants::HOURS_PER_YEAR;
use crate::types::{Entry, Report};
use serde::Serialize;
use std::collections::BTreeMap;

/// Safety margin on the longest scheduled repair when estimating planned downtime.
pub const SCHEDULED_DOWNTIME_MARGIN: f64 = 1.2;

/// Longest scheduled repair of the reference circuit (the 110 kV transformer), hours.
pub const LONGEST_SCHEDULED_REPAIR_HOURS: f64 = 43.0;

/// Failure rate of the sectionalizing breaker between the two circuits, per year.
pub const SECTIONALIZER_FAILURE_RATE: f64 = 0.02;

/// Number of installed units per equipment class.
pub type EquipmentCounts = BTreeMap<String, i64>;

/// Reliability of a single-circuit supply (SCS) and of a double-circuit supply (TCS)
/// built from two such circuits.
///
/// Fields are declared in key order so the JSON object comes out sorted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircuitComparison {
    /// Mean recovery time of the single circuit, hours.
    #[serde(rename = "averageRecoveryTime")]
    pub average_recovery_time: f64,
    /// Emergency downtime coefficient of the single circuit.
    #[serde(rename = "coefEmergencyDowntimeSCS")]
    pub coef_emergency_downtime_scs: f64,
    /// Scheduled downtime coefficient of the single circuit.
    #[serde(rename = "coefScheduledDowntimeSCS")]
    pub coef_scheduled_downtime_scs: f64,
    /// Failure rate of the single circuit, per year.
    #[serde(rename = "failureRateSCS")]
    pub failure_rate_scs: f64,
    /// Failure rate of simultaneous outage of both circuits, per year.
    #[serde(rename = "failureRateTCS")]
    pub failure_rate_tcs: f64,
    /// Double-circuit failure rate including the sectionalizing breaker, per year.
    #[serde(rename = "failureRateWithSectionalizerTCS")]
    pub failure_rate_with_sectionalizer_tcs: f64,
}

/// Compares a single-circuit supply with a double-circuit one.
///
/// Classes with a count of zero or below do not contribute; classes missing from
/// `counts` count as zero. The mean recovery time is the failure-rate-weighted mean of
/// the contributing classes' recovery times, so a circuit made of one class recovers in
/// exactly that class's time. With no contributing class the result is NaN.
///
/// # Errors
///
/// Returns `CalcError::UnknownEquipment` if `counts` names a class absent from `table`.
pub fn compare_circuits(
    table: &IndicatorTable,
    counts: &EquipmentCounts,
) -> Result<CircuitComparison, CalcError> {
    if let Some(unknown) = counts.keys().find(|key| table.get(key).is_none()) {
        return Err(CalcError::UnknownEquipment(unknown.clone()));
    }

    let contributions: Vec<(f64, f64)> = table
        .iter()
        .filter_map(|(key, indicator)| {
            let count = counts.get(key).copied().unwrap_or(0);
            (count > 0).then(|| (indicator.failure_rate * count as f64, indicator.recovery_time))
        })
        .collect();

    // `Sum` for f64 starts at -0.0; fold from +0.0 so an empty circuit reads as zero.
    let failure_rate_scs = contributions
        .iter()
        .fold(0.0, |acc, (rate, _)| acc + rate);
    let average_recovery_time = if failure_rate_scs == 0.0 {
        f64::NAN
    } else {
        contributions
            .iter()
            .fold(0.0, |acc, (rate, recovery)| acc + rate / failure_rate_scs * recovery)
    };

    let coef_emergency_downtime_scs = failure_rate_scs * average_recovery_time / HOURS_PER_YEAR;
    let coef_scheduled_downtime_scs =
        SCHEDULED_DOWNTIME_MARGIN * LONGEST_SCHEDULED_REPAIR_HOURS / HOURS_PER_YEAR;
    let failure_rate_tcs =
        2.0 * failure_rate_scs * (coef_emergency_downtime_scs + coef_scheduled_downtime_scs);

    Ok(CircuitComparison {
        average_recovery_time,
        coef_emergency_downtime_scs,
        coef_scheduled_downtime_scs,
        failure_rate_scs,
        failure_rate_tcs,
        failure_rate_with_sectionalizer_tcs: failure_rate_tcs + SECTIONALIZER_FAILURE_RATE,
    })
}

impl Report for CircuitComparison {
    fn title(&self) -> &'static str {
        "Single vs. Double Circuit Reliability"
    }

    fn entries(&self) -> Vec<Entry> {
        vec![
            Entry::real("failureRateSCS", self.failure_rate_scs, "1/year"),
            Entry::real("averageRecoveryTime", self.average_recovery_time, "h"),
            Entry::real("coefEmergencyDowntimeSCS", self.coef_emergency_downtime_scs, ""),
            Entry::real("coefScheduledDowntimeSCS", self.coef_scheduled_downtime_scs, ""),
            Entry::real("failureRateTCS", self.failure_rate_tcs, "1/year"),
            Entry::real(
                "failureRateWithSectionalizerTCS",
                self.failure_rate_with_sectionalizer_tcs,
                "1/year",
            ),
        ]
    }
}
