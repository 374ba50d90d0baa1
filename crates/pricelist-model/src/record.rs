//! Canonical catalog record.

use crate::error::ValueError;
use crate::field::CanonicalField;

/// Price used when a record has no resolved price column.
pub const PRICE_DEFAULT: f64 = 0.0;

/// Weight used when a record has no resolved weight column.
pub const WEIGHT_DEFAULT: f64 = 1.0;

/// One normalized row from a price-list file.
///
/// Resolved values are kept as the raw strings found in the source file. Numeric
/// interpretation happens on demand through [`Record::price_value`],
/// [`Record::weight_value`] and [`Record::unit_price`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Option<String>,
    pub price: Option<String>,
    pub weight: Option<String>,
    /// File name the row was read from.
    pub source: String,
}

impl Record {
    /// Creates a record with only its provenance set.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            name: None,
            price: None,
            weight: None,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = Some(weight.into());
        self
    }

    /// Returns the raw value stored for a canonical field.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        match field {
            CanonicalField::Name => self.name.as_deref(),
            CanonicalField::Price => self.price.as_deref(),
            CanonicalField::Weight => self.weight.as_deref(),
        }
    }

    /// Stores a raw value for a canonical field, replacing any previous one.
    pub fn set(&mut self, field: CanonicalField, value: String) {
        let slot = match field {
            CanonicalField::Name => &mut self.name,
            CanonicalField::Price => &mut self.price,
            CanonicalField::Weight => &mut self.weight,
        };
        *slot = Some(value);
    }

    /// Name used for matching and display; empty when unresolved.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// True when no canonical field was resolved for this row.
    pub fn is_unresolved(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.weight.is_none()
    }

    /// Numeric price, defaulting to [`PRICE_DEFAULT`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidNumber`] if a price is present but not numeric.
    pub fn price_value(&self) -> Result<f64, ValueError> {
        self.numeric(CanonicalField::Price, PRICE_DEFAULT)
    }

    /// Numeric weight, defaulting to [`WEIGHT_DEFAULT`] when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidNumber`] if a weight is present but not numeric.
    pub fn weight_value(&self) -> Result<f64, ValueError> {
        self.numeric(CanonicalField::Weight, WEIGHT_DEFAULT)
    }

    /// Price per unit weight.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidNumber`] for non-numeric fields and
    /// [`ValueError::DivisionByZero`] when the weight is 0.
    pub fn unit_price(&self) -> Result<f64, ValueError> {
        let price = self.price_value()?;
        let weight = self.weight_value()?;
        if weight == 0.0 {
            return Err(ValueError::DivisionByZero {
                name: self.display_name().to_string(),
                source_file: self.source.clone(),
            });
        }
        Ok(price / weight)
    }

    fn numeric(&self, field: CanonicalField, default: f64) -> Result<f64, ValueError> {
        let Some(raw) = self.get(field) else {
            return Ok(default);
        };
        // `inf` and `NaN` parse but cannot be ranked or filtered.
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ValueError::InvalidNumber {
                field,
                value: raw.to_string(),
                name: self.display_name().to_string(),
                source_file: self.source.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_use_defaults() {
        let record = Record::new("a.csv");
        assert!(record.is_unresolved());
        assert_eq!(record.price_value().unwrap(), 0.0);
        assert_eq!(record.weight_value().unwrap(), 1.0);
        assert_eq!(record.unit_price().unwrap(), 0.0);
    }

    #[test]
    fn test_unit_price() {
        let record = Record::new("b.csv")
            .with_name("Milk Powder")
            .with_price("300")
            .with_weight("0.5");
        assert!((record.unit_price().unwrap() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let record = Record::new("a.csv").with_price(" 80 ").with_weight("1e0");
        assert_eq!(record.unit_price().unwrap(), 80.0);
    }

    #[test]
    fn test_zero_weight_is_division_error() {
        let record = Record::new("a.csv").with_name("Salt").with_weight("0");
        assert_eq!(
            record.unit_price(),
            Err(ValueError::DivisionByZero {
                name: "Salt".to_string(),
                source_file: "a.csv".to_string(),
            })
        );
    }

    #[test]
    fn test_non_numeric_price_is_error() {
        let record = Record::new("a.csv").with_name("Tea").with_price("12,5");
        let err = record.price_value().unwrap_err();
        assert!(matches!(
            err,
            ValueError::InvalidNumber {
                field: CanonicalField::Price,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_values_are_errors() {
        for raw in ["inf", "-infinity", "NaN", "-NaN"] {
            let record = Record::new("a.csv").with_price(raw).with_weight(raw);
            assert!(
                matches!(
                    record.price_value(),
                    Err(ValueError::InvalidNumber {
                        field: CanonicalField::Price,
                        ..
                    })
                ),
                "{raw}"
            );
            assert!(record.weight_value().is_err(), "{raw}");
            assert!(record.unit_price().is_err(), "{raw}");
        }
    }

    #[test]
    fn test_empty_string_is_not_missing() {
        let record = Record::new("a.csv").with_weight("");
        assert!(record.weight_value().is_err());
    }

    #[test]
    fn test_get_and_set() {
        let mut record = Record::new("a.csv");
        record.set(CanonicalField::Name, "Bread".to_string());
        assert_eq!(record.get(CanonicalField::Name), Some("Bread"));
        assert_eq!(record.get(CanonicalField::Price), None);
        assert!(!record.is_unresolved());
    }
}
