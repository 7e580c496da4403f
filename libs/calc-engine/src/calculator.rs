//! Calculator orchestrator
//!
//! Every operation follows the same contract: validate, compute, format a
//! human-readable description, append it to the history, return the
//! result. A failing computation records nothing and propagates the error
//! unchanged. Expression evaluation is delegated to `evalexpr`.

use crate::error::{CalcError, Result};
use crate::history::{HistoryEntry, HistoryLog};
use crate::memory::MemoryRegister;
use crate::operation::{MemoryAction, Operation};
use crate::temperature::{self, TemperatureUnit};
use crate::{ops, params, stats};
use evalexpr::HashMapContext;
use serde_json::Value;
use tracing::debug;

/// Calculator state: bounded history plus a single memory slot
///
/// This is a plain owned struct; callers that share one instance across
/// requests serialize access around it (the service wraps it in a lock).
#[derive(Debug, Default)]
pub struct Calculator {
    history: HistoryLog,
    memory: MemoryRegister,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
            memory: MemoryRegister::new(),
        }
    }

    // === Basic operations ===

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = ops::add(a, b);
        self.history.append(format!("{} + {} = {}", a, b, result));
        result
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = ops::subtract(a, b);
        self.history.append(format!("{} - {} = {}", a, b, result));
        result
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = ops::multiply(a, b);
        self.history.append(format!("{} × {} = {}", a, b, result));
        result
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64> {
        let result = ops::divide(a, b)?;
        self.history.append(format!("{} ÷ {} = {}", a, b, result));
        Ok(result)
    }

    pub fn power(&mut self, base: f64, exponent: f64) -> f64 {
        let result = ops::power(base, exponent);
        self.history
            .append(format!("{}^{} = {}", base, exponent, result));
        result
    }

    pub fn square_root(&mut self, x: f64) -> Result<f64> {
        let result = ops::square_root(x)?;
        self.history.append(format!("√{} = {}", x, result));
        Ok(result)
    }

    // === Trigonometry (radians) ===

    pub fn sine(&mut self, angle: f64) -> f64 {
        let result = ops::sine(angle);
        self.history.append(format!("sin({}) = {}", angle, result));
        result
    }

    pub fn cosine(&mut self, angle: f64) -> f64 {
        let result = ops::cosine(angle);
        self.history.append(format!("cos({}) = {}", angle, result));
        result
    }

    pub fn tangent(&mut self, angle: f64) -> f64 {
        let result = ops::tangent(angle);
        self.history.append(format!("tan({}) = {}", angle, result));
        result
    }

    // === Statistics ===

    pub fn mean(&mut self, values: &[f64]) -> Result<f64> {
        let result = stats::mean(values)?;
        self.history
            .append(format!("Media de [{}] = {}", join_values(values), result));
        Ok(result)
    }

    pub fn median(&mut self, values: &[f64]) -> Result<f64> {
        let result = stats::median(values)?;
        self.history
            .append(format!("Mediana de [{}] = {}", join_values(values), result));
        Ok(result)
    }

    pub fn std_dev(&mut self, values: &[f64]) -> Result<f64> {
        let result = stats::std_dev(values)?;
        self.history.append(format!(
            "Desv. Est. de [{}] = {}",
            join_values(values),
            result
        ));
        Ok(result)
    }

    pub fn variance(&mut self, values: &[f64]) -> Result<f64> {
        let result = stats::variance(values)?;
        self.history.append(format!(
            "Varianza de [{}] = {}",
            join_values(values),
            result
        ));
        Ok(result)
    }

    pub fn max(&mut self, values: &[f64]) -> Result<f64> {
        let result = stats::max(values)?;
        self.history
            .append(format!("Máximo de [{}] = {}", join_values(values), result));
        Ok(result)
    }

    pub fn min(&mut self, values: &[f64]) -> Result<f64> {
        let result = stats::min(values)?;
        self.history
            .append(format!("Mínimo de [{}] = {}", join_values(values), result));
        Ok(result)
    }

    // === Expression evaluation ===

    /// Evaluate an arithmetic expression
    ///
    /// Parsing and evaluation are delegated to `evalexpr`; any evaluator
    /// fault is wrapped into a single descriptive error and nothing is
    /// recorded.
    pub fn evaluate_expression(&mut self, expression: &str) -> Result<f64> {
        let context = HashMapContext::new();
        let value = evalexpr::eval_with_context(expression, &context).map_err(|e| {
            CalcError::expression(format!("Failed to evaluate '{}': {}", expression, e))
        })?;
        let result = value_to_f64(value, expression)?;

        self.history.append(format!("{} = {}", expression, result));
        Ok(result)
    }

    // === Temperature conversion ===

    /// Convert between temperature unit names as they arrive on the wire
    ///
    /// The history description rounds to 2 decimals and abbreviates units
    /// to their initial; the returned value keeps full precision.
    pub fn convert_temperature(&mut self, value: f64, from: &str, to: &str) -> Result<f64> {
        let from_unit = TemperatureUnit::parse(from)
            .ok_or_else(|| CalcError::unsupported_conversion(format!("{} to {}", from, to)))?;
        let to_unit = TemperatureUnit::parse(to)
            .ok_or_else(|| CalcError::unsupported_conversion(format!("{} to {}", from, to)))?;

        let result = temperature::convert(value, from_unit, to_unit)?;
        self.history.append(format!(
            "{}°{} = {:.2}°{}",
            value,
            from_unit.initial(),
            result,
            to_unit.initial()
        ));
        Ok(result)
    }

    // === Memory ===

    pub fn memory_save(&mut self, value: f64) -> f64 {
        let stored = self.memory.save(value);
        self.history
            .append(format!("Guardado en memoria: {}", stored));
        stored
    }

    /// Read the memory slot without recording
    pub fn memory_read(&self) -> f64 {
        self.memory.read()
    }

    pub fn memory_clear(&mut self) -> f64 {
        let cleared = self.memory.clear();
        self.history.append("Memoria limpiada");
        cleared
    }

    // === History ===

    /// Snapshot of the history, oldest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.entries()
    }

    /// Empty the history and return the confirmation message
    pub fn clear_history(&mut self) -> &'static str {
        self.history.clear()
    }

    // === Dispatch ===

    /// Apply an operation tag to loosely-typed parameters
    ///
    /// Single dispatch point for the HTTP boundary: each tag decodes
    /// exactly the parameter shape it needs and delegates to the typed
    /// method above.
    pub fn apply(&mut self, operation: Operation, parameters: &Value) -> Result<f64> {
        debug!(operation = operation.name(), "dispatching operation");

        match operation {
            Operation::Add => {
                let (a, b) = params::pair(parameters)?;
                Ok(self.add(a, b))
            }
            Operation::Subtract => {
                let (a, b) = params::pair(parameters)?;
                Ok(self.subtract(a, b))
            }
            Operation::Multiply => {
                let (a, b) = params::pair(parameters)?;
                Ok(self.multiply(a, b))
            }
            Operation::Divide => {
                let (a, b) = params::pair(parameters)?;
                self.divide(a, b)
            }
            Operation::Power => {
                let (base, exponent) = params::pair(parameters)?;
                Ok(self.power(base, exponent))
            }
            Operation::SquareRoot => {
                let x = params::number(parameters)?;
                self.square_root(x)
            }
            Operation::Sine => {
                let angle = params::number(parameters)?;
                Ok(self.sine(angle))
            }
            Operation::Cosine => {
                let angle = params::number(parameters)?;
                Ok(self.cosine(angle))
            }
            Operation::Tangent => {
                let angle = params::number(parameters)?;
                Ok(self.tangent(angle))
            }
            Operation::Mean => {
                let values = params::series(parameters)?;
                self.mean(&values)
            }
            Operation::Median => {
                let values = params::series(parameters)?;
                self.median(&values)
            }
            Operation::StandardDeviation => {
                let values = params::series(parameters)?;
                self.std_dev(&values)
            }
            Operation::Variance => {
                let values = params::series(parameters)?;
                self.variance(&values)
            }
            Operation::Maximum => {
                let values = params::series(parameters)?;
                self.max(&values)
            }
            Operation::Minimum => {
                let values = params::series(parameters)?;
                self.min(&values)
            }
            Operation::EvaluateExpression => {
                let expression = params::text(parameters)?;
                self.evaluate_expression(&expression)
            }
            Operation::ConvertTemperature => {
                let (value, from, to) = params::temperature(parameters)?;
                self.convert_temperature(value, &from, &to)
            }
        }
    }

    /// Apply a memory action (`valor` is required only for save)
    pub fn apply_memory(&mut self, action: MemoryAction, value: Option<f64>) -> Result<f64> {
        debug!(action = action.name(), "dispatching memory action");

        match action {
            MemoryAction::Save => {
                let value = value.ok_or_else(|| {
                    CalcError::invalid_parameters("memory save requires 'valor'")
                })?;
                Ok(self.memory_save(value))
            }
            MemoryAction::Read => Ok(self.memory_read()),
            MemoryAction::Clear => Ok(self.memory_clear()),
        }
    }
}

/// Join values the way history descriptions list datasets: "1, 2, 3"
fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn value_to_f64(value: evalexpr::Value, expression: &str) -> Result<f64> {
    match value {
        evalexpr::Value::Float(f) => Ok(f),
        evalexpr::Value::Int(i) => Ok(i as f64),
        evalexpr::Value::Boolean(b) => Ok(if b { 1.0 } else { 0.0 }),
        other => Err(CalcError::expression(format!(
            "Expression '{}' did not produce a number: {:?}",
            expression, other
        ))),
    }
}
