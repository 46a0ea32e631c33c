use super::AppState;
use super::error::ApiError;
use super::form::FormFields;
use crate::fuel::{self, Components, FuelAnalysis, FuelOilConversion, FuelOilInput};
use crate::imbalance::{self, ImbalanceInput, ImbalanceReport};
use crate::reliability::{
    self, CircuitComparison, EquipmentCounts, OutageInput, OutageProjection,
};
use crate::types::Report;
use axum::Json;
use axum::extract::State;
use axum::response::Redirect;
use tracing::debug;

/// Answers anything but POST on an evaluate route.
pub async fn redirect_home() -> Redirect {
    Redirect::to("/")
}

fn respond<R: Report>(report: R) -> Result<Json<R>, ApiError> {
    report.ensure_finite()?;
    Ok(Json(report))
}

pub async fn coal_composition(fields: FormFields) -> Result<Json<FuelAnalysis>, ApiError> {
    let components = Components {
        hydrogen: fields.real("hydrogen")?,
        carbon: fields.real("carbon")?,
        sulfur: fields.real("sulfur")?,
        nitrogen: fields.real("nitrogen")?,
        oxygen: fields.real("oxygen")?,
        moisture: fields.real("moisture")?,
        ash: fields.real("ash")?,
    };
    debug!(?components, "evaluating coal composition");

    respond(fuel::analyze(&components))
}

pub async fn fuel_oil(fields: FormFields) -> Result<Json<FuelOilConversion>, ApiError> {
    let input = FuelOilInput {
        carbon: fields.real("carbon")?,
        hydrogen: fields.real("hydrogen")?,
        oxygen: fields.real("oxygen")?,
        sulfur: fields.real("sulfur")?,
        combustible_lhv: fields.real("combustibleLHV")?,
        raw_moisture: fields.real("rawMoisture")?,
        dry_ash: fields.real("dryAsh")?,
        combustible_vanadium: fields.real("combustibleVanadium")?,
    };
    debug!(?input, "evaluating fuel oil conversion");

    respond(fuel::convert(&input))
}

pub async fn electricity_imbalance(
    fields: FormFields,
) -> Result<Json<ImbalanceReport>, ApiError> {
    let input = ImbalanceInput {
        average_daily_capacity: fields.real("average_daily_capacity")?,
        electricity_cost: fields.real("electricity_cost")?,
        standard_deviation: fields.real("standard_deviation")?,
    };
    debug!(?input, "evaluating electricity imbalance");

    respond(imbalance::evaluate(&input))
}

pub async fn circuit_reliability(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Json<CircuitComparison>, ApiError> {
    let mut counts = EquipmentCounts::new();
    for key in state.indicators.keys() {
        counts.insert(key.to_string(), fields.whole(key)?);
    }
    debug!(?counts, "evaluating circuit reliability");

    respond(reliability::compare_circuits(&state.indicators, &counts)?)
}

pub async fn outage_losses(fields: FormFields) -> Result<Json<OutageProjection>, ApiError> {
    let input = OutageInput {
        losses_emergency: fields.real("lossesEmergency")?,
        losses_scheduled: fields.real("lossesScheduled")?,
        pm: fields.real("pm")?,
        tm: fields.real("tm")?,
        failure_rate: fields.real("failureRate")?,
        average_recovery_time: fields.real("averageRecoveryTime")?,
        average_planned_downtime: fields.real("averagePlannedDowntime")?,
    };
    debug!(?input, "evaluating outage losses");

    respond(reliability::project_outages(&input))
}
