use super::{Composition, MOISTURE_EVAPORATION_HEAT};
use crate::types::{Entry, Report};
use serde::{Deserialize, Serialize};

/// Elemental analysis of a coal sample on the working mass basis, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub hydrogen: f64,
    pub carbon: f64,
    pub sulfur: f64,
    pub nitrogen: f64,
    pub oxygen: f64,
    pub moisture: f64,
    pub ash: f64,
}

impl Components {
    /// Name/value pairs for every component.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("hydrogen", self.hydrogen),
            ("carbon", self.carbon),
            ("sulfur", self.sulfur),
            ("nitrogen", self.nitrogen),
            ("oxygen", self.oxygen),
            ("moisture", self.moisture),
            ("ash", self.ash),
        ]
    }
}

/// The mass basis a working-mass analysis is recalculated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassBasis {
    /// Working mass without moisture.
    Dry,
    /// Working mass without moisture and ash.
    Combustible,
}

impl MassBasis {
    fn excludes(self, component: &str) -> bool {
        match self {
            MassBasis::Dry => component == "moisture",
            MassBasis::Combustible => component == "moisture" || component == "ash",
        }
    }
}

/// Factors that convert working-mass percentages to the dry and combustible bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionCoefficients {
    pub combustible: f64,
    pub dry: f64,
}

impl ConversionCoefficients {
    pub fn for_components(components: &Components) -> Self {
        Self {
            combustible: 100.0 / (100.0 - components.moisture - components.ash),
            dry: 100.0 / (100.0 - components.moisture),
        }
    }
}

/// Low heating values, MJ/kg, on each basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatingValues {
    pub combustible: f64,
    pub dry: f64,
    pub raw: f64,
}

/// Full recalculation of a coal sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelAnalysis {
    pub coefs: ConversionCoefficients,
    pub composition_dry: Composition,
    pub composition_combustible: Composition,
    pub low_heating_values: HeatingValues,
}

/// Scales every component present on `basis` by `coefficient`.
pub fn composition(components: &Components, basis: MassBasis, coefficient: f64) -> Composition {
    components
        .entries()
        .into_iter()
        .filter(|(name, _)| !basis.excludes(name))
        .map(|(name, value)| (name, value * coefficient))
        .collect()
}

/// Mendeleev's formula for the working mass, then moisture-corrected for the other bases.
pub fn low_heating_values(components: &Components) -> HeatingValues {
    let Components {
        hydrogen,
        carbon,
        sulfur,
        oxygen,
        moisture,
        ash,
        ..
    } = *components;

    let raw = (339.0 * carbon + 1030.0 * hydrogen - 108.8 * (oxygen - sulfur) - 25.0 * moisture)
        / 1000.0;
    let moisture_free = raw + MOISTURE_EVAPORATION_HEAT * moisture;

    HeatingValues {
        combustible: moisture_free * 100.0 / (100.0 - moisture - ash),
        dry: moisture_free * 100.0 / (100.0 - moisture),
        raw,
    }
}

/// Recalculates a working-mass analysis to the dry and combustible bases.
pub fn analyze(components: &Components) -> FuelAnalysis {
    let coefs = ConversionCoefficients::for_components(components);

    FuelAnalysis {
        coefs,
        composition_dry: composition(components, MassBasis::Dry, coefs.dry),
        composition_combustible: composition(components, MassBasis::Combustible, coefs.combustible),
        low_heating_values: low_heating_values(components),
    }
}

impl Report for FuelAnalysis {
    fn title(&self) -> &'static str {
        "Coal Composition and Heating Value"
    }

    fn entries(&self) -> Vec<Entry> {
        let mut entries = vec![
            Entry::real("coefs.dry", self.coefs.dry, ""),
            Entry::real("coefs.combustible", self.coefs.combustible, ""),
        ];
        entries.extend(
            self.composition_dry
                .iter()
                .map(|(name, value)| Entry::real(format!("compositionDry.{name}"), *value, "%")),
        );
        entries.extend(self.composition_combustible.iter().map(|(name, value)| {
            Entry::real(format!("compositionCombustible.{name}"), *value, "%")
        }));
        entries.extend([
            Entry::real("lowHeatingValues.raw", self.low_heating_values.raw, "MJ/kg"),
            Entry::real("lowHeatingValues.dry", self.low_heating_values.dry, "MJ/kg"),
            Entry::real(
                "lowHeatingValues.combustible",
                self.low_heating_values.combustible,
                "MJ/kg",
            ),
        ]);
        entries
    }
}
