use crate::types::{Entry, Report};
use serde::{Deserialize, Serialize};

/// Inputs of the under-supply loss projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutageInput {
    /// Specific losses from emergency under-supply, UAH per kW·h.
    pub losses_emergency: f64,
    /// Specific losses from scheduled under-supply, UAH per kW·h.
    pub losses_scheduled: f64,
    /// Maximum load P_M, MW.
    pub pm: f64,
    /// Annual utilisation time of the maximum load T_M, hours.
    pub tm: f64,
    /// Failure rate ω, per year.
    pub failure_rate: f64,
    /// Mean recovery time t_v, years.
    pub average_recovery_time: f64,
    /// Mean planned downtime k_p, as a fraction of the year.
    pub average_planned_downtime: f64,
}

/// Expected annual under-supply (kW·h) and losses (UAH), truncated to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutageProjection {
    pub expected_outages_scheduled: i64,
    pub expected_outages_emergency: i64,
    pub expected_losses: i64,
}

/// Projects expected under-supply and the resulting losses.
///
/// Each quantity is truncated toward zero before it feeds the next one, so the losses
/// are computed from the whole-number under-supply figures. Conversions saturate at the
/// `i64` bounds and a NaN product becomes zero.
pub fn project_outages(input: &OutageInput) -> OutageProjection {
    let energy_at_max_load = input.pm * 1000.0 * input.tm;

    let expected_outages_scheduled = (input.average_planned_downtime * energy_at_max_load) as i64;
    let expected_outages_emergency =
        (input.failure_rate * input.average_recovery_time * energy_at_max_load) as i64;
    let expected_losses = (input.losses_emergency * expected_outages_emergency as f64
        + input.losses_scheduled * expected_outages_scheduled as f64) as i64;

    OutageProjection {
        expected_outages_scheduled,
        expected_outages_emergency,
        expected_losses,
    }
}

impl Report for OutageProjection {
    fn title(&self) -> &'static str {
        "Expected Under-Supply and Losses"
    }

    fn entries(&self) -> Vec<Entry> {
        vec![
            Entry::whole("expectedOutagesScheduled", self.expected_outages_scheduled, "kW·h"),
            Entry::whole("expectedOutagesEmergency", self.expected_outages_emergency, "kW·h"),
            Entry::whole("expectedLosses", self.expected_losses, "UAH"),
        ]
    }
}
