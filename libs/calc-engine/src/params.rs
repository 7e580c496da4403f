//! Request parameter decoding
//!
//! `parametros` arrives as loose JSON: a bare number, a string, or an
//! array mixing numbers and unit names. Each operation decodes exactly the
//! shape it needs; mismatches fail with `InvalidParameters` before any
//! computation runs. Statistical operations treat a non-array as the
//! "not a sequence" case and fail with `EmptyInput`.

use crate::error::{CalcError, Result};
use serde_json::Value;

/// A single number, accepted bare or as a one-element array
pub fn number(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CalcError::invalid_parameters("number out of range")),
        Value::Array(items) if items.len() == 1 => number(&items[0]),
        _ => Err(CalcError::invalid_parameters("expected a single number")),
    }
}

/// Exactly two numbers as `[a, b]`
pub fn pair(value: &Value) -> Result<(f64, f64)> {
    let items = value
        .as_array()
        .filter(|items| items.len() == 2)
        .ok_or_else(|| CalcError::invalid_parameters("expected two numbers as [a, b]"))?;

    match (items[0].as_f64(), items[1].as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(CalcError::invalid_parameters(
            "expected two numbers as [a, b]",
        )),
    }
}

/// A full numeric dataset
///
/// The array itself is the sample; a bare value is not a sequence.
pub fn series(value: &Value) -> Result<Vec<f64>> {
    let items = value
        .as_array()
        .ok_or_else(|| CalcError::empty_input("expected an array of numbers"))?;

    items
        .iter()
        .map(|item| {
            item.as_f64()
                .ok_or_else(|| CalcError::invalid_parameters("expected an array of numbers"))
        })
        .collect()
}

/// A single string, accepted bare or as a one-element array
pub fn text(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Array(items) if items.len() == 1 => text(&items[0]),
        _ => Err(CalcError::invalid_parameters("expected a single string")),
    }
}

/// Temperature conversion triple `[value, from, to]`
pub fn temperature(value: &Value) -> Result<(f64, String, String)> {
    let items = value
        .as_array()
        .filter(|items| items.len() == 3)
        .ok_or_else(|| CalcError::invalid_parameters("expected [value, from, to]"))?;

    let degrees = items[0]
        .as_f64()
        .ok_or_else(|| CalcError::invalid_parameters("expected [value, from, to]"))?;
    let from = items[1]
        .as_str()
        .ok_or_else(|| CalcError::invalid_parameters("expected [value, from, to]"))?;
    let to = items[2]
        .as_str()
        .ok_or_else(|| CalcError::invalid_parameters("expected [value, from, to]"))?;

    Ok((degrees, from.to_string(), to.to_string()))
}
