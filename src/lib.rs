pub mod config;
pub mod error;
pub mod fuel;
pub mod imbalance;
pub mod math;
pub mod reliability;
pub mod server;
pub mod telemetry;
pub mod types;

pub use config::{Deployment, ServerConfig};
pub use error::CalcError;
pub use fuel::{Components, FuelAnalysis, FuelOilConversion, FuelOilInput};
pub use imbalance::{ImbalanceInput, ImbalanceReport};
pub use math::gaussian::{CapacityRange, gauss_legendre_5, normal_density};
pub use reliability::{
    CircuitComparison, EquipmentCounts, IndicatorTable, OutageInput, OutageProjection,
    ReliabilityIndicator,
};
pub use types::{Entry, Quantity, Report};

use std::sync::OnceLock;

static DEFAULT_INDICATORS: OnceLock<IndicatorTable> = OnceLock::new();

/// The built-in reliability indicator table (16 equipment classes).
pub fn get_default_indicators() -> &'static IndicatorTable {
    DEFAULT_INDICATORS.get_or_init(|| {
        const DEFAULT_INDICATORS_TOML: &str = include_str!("../resources/reliability.data.toml");
        IndicatorTable::load_from_str(DEFAULT_INDICATORS_TOML)
            .expect("Failed to parse embedded reliability indicators. This is a library bug.")
    })
}
