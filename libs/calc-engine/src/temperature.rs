//! Temperature unit conversion
//!
//! Six directed closed-form conversions between celsius, fahrenheit and
//! kelvin. Identity conversions (celsius to celsius) are not supported;
//! neither is any unit outside these three.

use crate::error::{CalcError, Result};

/// Temperature units accepted by [`convert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse a wire unit name (`celsius`, `fahrenheit`, `kelvin`)
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "celsius" => Some(Self::Celsius),
            "fahrenheit" => Some(Self::Fahrenheit),
            "kelvin" => Some(Self::Kelvin),
            _ => None,
        }
    }

    /// Uppercased initial used in history descriptions (C, F, K)
    pub fn initial(&self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
            Self::Kelvin => 'K',
        }
    }
}

/// Convert `value` between two temperature units
///
/// Fails with [`CalcError::UnsupportedConversion`] for identity pairs.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Result<f64> {
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Fahrenheit) => Ok(value * 9.0 / 5.0 + 32.0),
        (Celsius, Kelvin) => Ok(value + 273.15),
        (Fahrenheit, Celsius) => Ok((value - 32.0) * 5.0 / 9.0),
        (Fahrenheit, Kelvin) => Ok((value - 32.0) * 5.0 / 9.0 + 273.15),
        (Kelvin, Celsius) => Ok(value - 273.15),
        (Kelvin, Fahrenheit) => Ok((value - 273.15) * 9.0 / 5.0 + 32.0),
        // Identity pairs stay unsupported
        _ => Err(CalcError::unsupported_conversion(format!(
            "{:?} to {:?}",
            from, to
        ))),
    }
}
