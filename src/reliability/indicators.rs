//! Reliability indicators of grid equipment and utilities for loading them from TOML files.
//!
//! Each `ReliabilityIndicator` describes one equipment class. An `IndicatorTable` maps the
//! class key (also the name of the form field carrying its count) to its indicators. The
//! table is read-only once loaded; the default one is embedded in the crate.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Statistical reliability data of one equipment class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReliabilityIndicator {
    /// Human-readable name of the class.
    #[serde(default)]
    pub description: String,
    /// Failure rate ω, failures per year per unit (per km for lines).
    pub failure_rate: f64,
    /// Mean emergency recovery time t_v, hours.
    pub recovery_time: f64,
    /// Frequency of scheduled repairs μ, per year.
    pub repair_frequency: f64,
    /// Nominal duration of a scheduled repair t_p, hours. Not defined for every class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_duration: Option<u32>,
}

/// An immutable set of equipment classes keyed by form field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTable {
    /// Keys are ordered, so aggregations over the table are reproducible.
    #[serde(deserialize_with = "deserialize_equipment_map")]
    pub equipment: BTreeMap<String, ReliabilityIndicator>,
}

impl IndicatorTable {
    /// Loads an indicator table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::IoError` if the file cannot be read, or a
    /// `CalcError::DeserializationError` if its content is not a valid table.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use enercalc::IndicatorTable;
    /// use std::path::Path;
    ///
    /// let table = IndicatorTable::load_from_file(Path::new("indicators.toml")).unwrap();
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, CalcError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| CalcError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses an indicator table from a TOML string.
    ///
    /// The string must contain an `[equipment.<key>]` table per class. Keys must be
    /// ASCII alphanumeric (they double as form field names), rates and times must be
    /// finite and non-negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use enercalc::IndicatorTable;
    ///
    /// let toml_data = r#"
    /// [equipment.t110Q]
    /// failure_rate = 0.015
    /// recovery_time = 100.0
    /// repair_frequency = 1.0
    /// repair_duration = 43
    /// "#;
    ///
    /// let table = IndicatorTable::load_from_str(toml_data).unwrap();
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, CalcError> {
        let table: Self = toml::from_str(toml_str)?;
        table.validate()?;
        Ok(table)
    }

    /// Creates an empty table.
    pub fn new() -> Self {
        IndicatorTable {
            equipment: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ReliabilityIndicator> {
        self.equipment.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.equipment.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReliabilityIndicator)> {
        self.equipment.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.equipment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }

    fn validate(&self) -> Result<(), CalcError> {
        for (key, indicator) in &self.equipment {
            let checks = [
                ("failure_rate", indicator.failure_rate),
                ("recovery_time", indicator.recovery_time),
                ("repair_frequency", indicator.repair_frequency),
            ];
            for (name, value) in checks {
                if !value.is_finite() || value < 0.0 {
                    return Err(CalcError::InvalidIndicator {
                        key: key.clone(),
                        reason: format!("{name} must be finite and non-negative, got {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for IndicatorTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserializes the equipment map, rejecting keys that cannot serve as form field names.
fn deserialize_equipment_map<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, ReliabilityIndicator>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EquipmentMapVisitor;

    impl<'de> Visitor<'de> for EquipmentMapVisitor {
        type Value = BTreeMap<String, ReliabilityIndicator>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map from equipment key to reliability indicators")
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut equipment = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<String, ReliabilityIndicator>()? {
                if !is_valid_key(&key) {
                    return Err(de::Error::custom(format!("invalid equipment key: '{}'", key)));
                }
                equipment.insert(key, value);
            }
            Ok(equipment)
        }
    }

    deserializer.deserialize_map(EquipmentMapVisitor)
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_toml_string() -> String {
        r#"
        [equipment.t110Q]
        description = "Transformer 110 kV"
        failure_rate = 0.015
        recovery_time = 100.0
        repair_frequency = 1.0
        repair_duration = 43

        [equipment.ed610Q]
        failure_rate = 0.1
        recovery_time = 160.0
        repair_frequency = 0.5
        "#
        .to_string()
    }

    fn get_expected_table() -> IndicatorTable {
        let mut equipment = BTreeMap::new();
        equipment.insert(
            "t110Q".to_string(),
            ReliabilityIndicator {
                description: "Transformer 110 kV".to_string(),
                failure_rate: 0.015,
                recovery_time: 100.0,
                repair_frequency: 1.0,
                repair_duration: Some(43),
            },
        );
        equipment.insert(
            "ed610Q".to_string(),
            ReliabilityIndicator {
                description: String::new(),
                failure_rate: 0.1,
                recovery_time: 160.0,
                repair_frequency: 0.5,
                repair_duration: None,
            },
        );
        IndicatorTable { equipment }
    }

    #[test]
    fn test_load_from_str_valid() {
        let table = IndicatorTable::load_from_str(&create_test_toml_string()).unwrap();
        assert_eq!(table, get_expected_table());
    }

    #[test]
    fn test_keys_are_sorted() {
        let table = IndicatorTable::load_from_str(&create_test_toml_string()).unwrap();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["ed610Q", "t110Q"]);
    }

    #[test]
    fn test_load_from_str_invalid_toml() {
        let result = IndicatorTable::load_from_str("this is not valid toml");
        assert!(matches!(result, Err(CalcError::DeserializationError(_))));
    }

    #[test]
    fn test_load_from_str_invalid_key() {
        let toml_str = r#"
        [equipment."bad key"]
        failure_rate = 0.1
        recovery_time = 1.0
        repair_frequency = 0.5
        "#;
        let error_string = IndicatorTable::load_from_str(toml_str)
            .unwrap_err()
            .to_string();
        assert!(error_string.contains("invalid equipment key: 'bad key'"));
    }

    #[test]
    fn test_load_from_str_missing_field() {
        let toml_str = r#"
        [equipment.t110Q]
        failure_rate = 0.015
        repair_frequency = 1.0
        "#;
        let result = IndicatorTable::load_from_str(toml_str);
        assert!(matches!(result, Err(CalcError::DeserializationError(_))));
    }

    #[test]
    fn test_load_from_str_negative_rate() {
        let toml_str = r#"
        [equipment.t110Q]
        failure_rate = -0.015
        recovery_time = 100.0
        repair_frequency = 1.0
        "#;
        let result = IndicatorTable::load_from_str(toml_str);
        assert!(matches!(result, Err(CalcError::InvalidIndicator { ref key, .. }) if key == "t110Q"));
    }

    #[test]
    fn test_load_from_file_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", create_test_toml_string()).unwrap();

        let table = IndicatorTable::load_from_file(temp_file.path()).unwrap();
        assert_eq!(table, get_expected_table());
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = IndicatorTable::load_from_file(Path::new("non_existent_file.toml"));
        assert!(matches!(result, Err(CalcError::IoError { .. })));
    }

    #[test]
    fn test_new_and_default() {
        assert!(IndicatorTable::new().is_empty());
        assert_eq!(IndicatorTable::new(), IndicatorTable::default());
    }
}
