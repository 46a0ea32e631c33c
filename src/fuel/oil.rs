use super::{Composition, MOISTURE_EVAPORATION_HEAT};
use crate::types::{Entry, Report};
use serde::{Deserialize, Serialize};

/// Fuel oil analysis as delivered by the supplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelOilInput {
    /// Carbon on the combustible basis, %.
    pub carbon: f64,
    /// Hydrogen on the combustible basis, %.
    pub hydrogen: f64,
    /// Oxygen on the combustible basis, %.
    pub oxygen: f64,
    /// Sulfur on the combustible basis, %.
    pub sulfur: f64,
    /// Low heating value of the combustible mass, MJ/kg.
    pub combustible_lhv: f64,
    /// Moisture of the working mass, %.
    pub raw_moisture: f64,
    /// Ash of the dry mass, %.
    pub dry_ash: f64,
    /// Vanadium in the combustible mass, mg/kg.
    pub combustible_vanadium: f64,
}

/// Working-mass composition and LHV of a fuel oil.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelOilConversion {
    pub raw_composition: Composition,
    #[serde(rename = "rawLHV")]
    pub raw_lhv: f64,
}

/// Recalculates a combustible-basis fuel oil analysis to the working mass.
pub fn convert(input: &FuelOilInput) -> FuelOilConversion {
    let combustible_share = 100.0 - input.raw_moisture - input.dry_ash;
    let dry_share = 100.0 - input.raw_moisture;

    let raw_composition = Composition::from([
        ("carbon", input.carbon * combustible_share / 100.0),
        ("hydrogen", input.hydrogen * combustible_share / 100.0),
        ("oxygen", input.oxygen * combustible_share / 100.0),
        ("sulfur", input.sulfur * combustible_share / 100.0),
        ("moisture", input.raw_moisture),
        ("ash", input.dry_ash * dry_share / 100.0),
        ("vanadium", input.combustible_vanadium * dry_share / 100.0),
    ]);

    FuelOilConversion {
        raw_composition,
        raw_lhv: input.combustible_lhv * combustible_share / 100.0
            - MOISTURE_EVAPORATION_HEAT * input.raw_moisture,
    }
}

impl Report for FuelOilConversion {
    fn title(&self) -> &'static str {
        "Fuel Oil Working Mass"
    }

    fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .raw_composition
            .iter()
            .map(|(&name, &value)| {
                let unit = if name == "vanadium" { "mg/kg" } else { "%" };
                Entry::real(format!("rawComposition.{name}"), value, unit)
            })
            .collect();
        entries.push(Entry::real("rawLHV", self.raw_lhv, "MJ/kg"));
        entries
    }
}
