//! Fuel composition and heating value calculators.
//!
//! Two models are provided. `composition` recalculates a coal sample given on the working
//! mass basis to the dry and combustible bases and estimates its low heating value (LHV)
//! with Mendeleev's formula. `oil` does the reverse for fuel oil, whose analysis is given
//! on the combustible basis, producing the working-mass composition and LHV.
//!
//! Inputs are percentages and are not range-checked: negative values and values above
//! 100 flow through the formulas as given.

mod composition;
mod oil;

use std::collections::BTreeMap;

pub use composition::{
    Components, ConversionCoefficients, FuelAnalysis, HeatingValues, MassBasis, analyze,
    composition, low_heating_values,
};
pub use oil::{FuelOilConversion, FuelOilInput, convert};

/// Component percentages keyed by component name, ordered by name.
pub type Composition = BTreeMap<&'static str, f64>;

/// Latent heat of moisture evaporation used by the LHV corrections, MJ/kg per percent.
pub const MOISTURE_EVAPORATION_HEAT: f64 = 0.025;
