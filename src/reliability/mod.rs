//! Grid reliability calculators.
//!
//! `indicators` holds the equipment reliability table, `system` compares a single-circuit
//! supply with a double-circuit one built from the same equipment, and `losses` projects
//! the expected under-supply of energy and the resulting losses.

mod indicators;
mod losses;
mod system;

pub use indicators::{IndicatorTable, ReliabilityIndicator};
pub use losses::{OutageInput, OutageProjection, project_outages};
pub use system::{
    CircuitComparison, EquipmentCounts, LONGEST_SCHEDULED_REPAIR_HOURS, SCHEDULED_DOWNTIME_MARGIN,
    SECTIONALIZER_FAILURE_RATE, compare_circuits,
};
