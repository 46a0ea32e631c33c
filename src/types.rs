//! Shared result types for the calculators.
//!
//! Every calculator returns a plain struct whose `Serialize` impl fixes the JSON wire format.
//! The `Report` trait adds a flat, ordered view of the same numbers so that the HTTP layer can
//! reject non-finite results and the command-line tool can render tables and CSV without
//! knowing each result's shape.

use crate::error::CalcError;
use serde::Serialize;

/// A single calculated quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// A real-valued result.
    Real(f64),
    /// A result that the model truncates to a whole number.
    Whole(i64),
}

impl Quantity {
    /// Whole numbers are always finite; reals are finite unless NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Quantity::Real(value) => value.is_finite(),
            Quantity::Whole(_) => true,
        }
    }

    /// Formats the quantity with `precision` decimal places. Whole numbers ignore the precision.
    pub fn format(&self, precision: usize) -> String {
        match self {
            Quantity::Real(value) => format!("{:.*}", precision, value),
            Quantity::Whole(value) => value.to_string(),
        }
    }
}

/// One named row of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Dotted path matching the JSON field, e.g. `lowHeatingValues.raw`.
    pub name: String,
    /// The calculated value.
    pub quantity: Quantity,
    /// Display unit, empty for dimensionless values.
    pub unit: &'static str,
}

impl Entry {
    pub fn real(name: impl Into<String>, value: f64, unit: &'static str) -> Self {
        Self {
            name: name.into(),
            quantity: Quantity::Real(value),
            unit,
        }
    }

    pub fn whole(name: impl Into<String>, value: i64, unit: &'static str) -> Self {
        Self {
            name: name.into(),
            quantity: Quantity::Whole(value),
            unit,
        }
    }
}

/// A calculator result that can be inspected entry by entry.
pub trait Report: Serialize {
    /// A short human-readable title for the calculation.
    fn title(&self) -> &'static str;

    /// All serialized quantities of the result, in a stable display order.
    fn entries(&self) -> Vec<Entry>;

    /// Extra quantities shown by the command line but never serialized.
    fn diagnostics(&self) -> Vec<Entry> {
        Vec::new()
    }

    /// Fails with `CalcError::NonFinite` naming the first NaN or infinite entry.
    ///
    /// Diagnostics are not checked.
    fn ensure_finite(&self) -> Result<(), CalcError> {
        match self.entries().into_iter().find(|e| !e.quantity.is_finite()) {
            Some(entry) => Err(CalcError::NonFinite { name: entry.name }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        a: f64,
        b: i64,
    }

    impl Report for Pair {
        fn title(&self) -> &'static str {
            "Pair"
        }

        fn entries(&self) -> Vec<Entry> {
            vec![Entry::real("a", self.a, ""), Entry::whole("b", self.b, "")]
        }
    }

    #[test]
    fn test_quantity_format() {
        assert_eq!(Quantity::Real(1.23456).format(2), "1.23");
        assert_eq!(Quantity::Whole(42).format(6), "42");
    }

    #[test]
    fn test_ensure_finite_passes_for_finite_values() {
        assert!(Pair { a: 1.0, b: 2 }.ensure_finite().is_ok());
    }

    #[test]
    fn test_ensure_finite_names_offending_entry() {
        let err = Pair { a: f64::NAN, b: 2 }.ensure_finite().unwrap_err();
        assert!(matches!(err, CalcError::NonFinite { ref name } if name == "a"));

        let err = Pair {
            a: f64::INFINITY,
            b: 0,
        }
        .ensure_finite()
        .unwrap_err();
        assert_eq!(err.to_string(), "Result 'a' is not a finite number");
    }
}
