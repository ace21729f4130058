//! Unit-tagged text input for temperature and absolute pressure.
//!
//! Values are entered as `<number> <unit>` ("350 K", "20 C", "1013.25 kPa",
//! "725 psia") and converted to uom quantities. A bare number is read in the
//! equation of state's working units: kelvin for temperature, MPa for pressure.

use std::fmt;
use zf_core::units::{Pressure, Temperature, k, kpa, mpa, pa, to_kelvin, to_mpa};

/// Quantity family for a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: K)
    Temperature,
    /// Absolute pressure (canonical: MPa); gauge units are converted with 1 atm
    Pressure,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
    /// Unit not allowed because it hides absolute vs gauge
    AmbiguousUnit { unit: String, reason: String },
    /// Value outside the physical range
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
            Self::AmbiguousUnit { unit, reason } => {
                write!(f, "Ambiguous unit '{}': {}", unit, reason)
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {} out of range: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Parse `raw_text` as `quantity`, returning K or MPa.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    match quantity {
        Quantity::Temperature => parse_temperature(raw_text).map(to_kelvin),
        Quantity::Pressure => parse_pressure(raw_text).map(to_mpa),
    }
}

/// Parse a temperature; must be above absolute zero.
pub fn parse_temperature(input: &str) -> Result<Temperature, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "degc" | "celsius" => value + 273.15,
        "f" | "°f" | "degf" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "degr" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature.to_string(),
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }
    Ok(k(kelvin))
}

/// Parse an absolute pressure; must be positive.
pub fn parse_pressure(input: &str) -> Result<Pressure, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pressure = match unit.to_lowercase().as_str() {
        "" | "mpa" => mpa(value),
        "pa" | "pascal" => pa(value),
        "kpa" => kpa(value),
        "bar" | "bara" => pa(value * 1e5),
        "mbar" | "millibar" => pa(value * 100.0),
        "atm" => pa(value * 101_325.0),
        "psia" => pa(value * 6_894.757),
        "psig" => pa((value + 14.695_95) * 6_894.757),
        "barg" => pa((value + 1.013_25) * 1e5),
        "kpag" => kpa(value + 101.325),
        "mpag" => mpa(value + 0.101_325),
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit,
                reason: "Use 'psia' (absolute) or 'psig' (gauge)".to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure.to_string(),
            });
        }
    };

    let mpa_value = to_mpa(pressure);
    if mpa_value <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: mpa_value,
            reason: "Absolute pressure must be > 0".to_string(),
        });
    }
    Ok(pressure)
}

/// Split "14.7 psia" into (14.7, "psia").
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let split_idx = trimmed
        .char_indices()
        .find(|&(i, c)| {
            let exponent = (c == 'e' || c == 'E')
                && trimmed[i + 1..].starts_with(|n: char| n.is_ascii_digit() || n == '-' || n == '+');
            !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || exponent)
        })
        .map_or(trimmed.len(), |(i, _)| i);

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;
    if !value.is_finite() {
        return Err(UnitError::ParseError(format!("'{}' is not finite", input)));
    }
    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> f64 {
        parse_quantity(s, Quantity::Temperature).unwrap()
    }

    fn p(s: &str) -> f64 {
        parse_quantity(s, Quantity::Pressure).unwrap()
    }

    #[test]
    fn temperatures() {
        assert_eq!(t("300 K"), 300.0);
        assert_eq!(t("300"), 300.0);
        assert!((t("20 C") - 293.15).abs() < 1e-9);
        assert!((t("60F") - 288.705_555).abs() < 1e-5);
        assert!((t("518.67 R") - 288.15).abs() < 1e-9);
    }

    #[test]
    fn pressures() {
        assert!((p("1013.25 kPa") - 1.01325).abs() < 1e-12);
        assert!((p("10") - 10.0).abs() < 1e-12);
        assert!((p("1 atm") - 0.101325).abs() < 1e-12);
        assert!((p("50 bar") - 5.0).abs() < 1e-12);
        assert!((p("0 psig") - 0.101_325).abs() < 1e-6);
        assert!((p("1e5 Pa") - 0.1).abs() < 1e-12);
    }

    #[test]
    fn exponent_is_not_taken_for_a_unit() {
        assert!((p("1.5e1 MPa") - 15.0).abs() < 1e-12);
        assert!(matches!(
            parse_pressure("3 ergs"),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn rejects_plain_psi() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn rejects_non_physical() {
        assert!(parse_temperature("-300 C").is_err());
        assert!(parse_pressure("0 kPa").is_err());
        assert!(parse_pressure("-1 bar").is_err());
        assert!(parse_temperature("abc").is_err());
    }
}
