//! Arithmetic and trigonometric operations
//!
//! Pure functions with no side effects. History recording is the
//! orchestrator's responsibility, never done here.

use crate::error::{CalcError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// Fails with [`CalcError::DivisionByZero`] when the divisor is zero.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root of `x`
///
/// Fails with [`CalcError::InvalidDomain`] for negative input.
pub fn square_root(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(CalcError::invalid_domain(
            "square root of a negative number",
        ));
    }
    Ok(x.sqrt())
}

/// Sine of an angle in radians
pub fn sine(angle: f64) -> f64 {
    angle.sin()
}

/// Cosine of an angle in radians
pub fn cosine(angle: f64) -> f64 {
    angle.cos()
}

/// Tangent of an angle in radians
pub fn tangent(angle: f64) -> f64 {
    angle.tan()
}
