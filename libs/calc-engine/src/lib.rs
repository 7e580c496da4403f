//! calc-engine - Calculator core for Calculadora Avanzada
//!
//! Arithmetic, trigonometric and statistical operations with a bounded
//! operation history and a single memory register.
//!
//! # Features
//!
//! - **Operations**: basic arithmetic, trigonometry, descriptive statistics
//! - **Expression evaluation**: delegated to `evalexpr`
//! - **Temperature conversion**: celsius / fahrenheit / kelvin
//! - **History**: sliding window over the 50 most recent descriptions
//! - **Dispatch**: enumerated operation tags, unknown names rejected up front
//!
//! # Example
//!
//! ```rust
//! use calc_engine::{Calculator, Operation};
//! use serde_json::json;
//!
//! let mut calc = Calculator::new();
//!
//! // Typed calls
//! assert_eq!(calc.add(5.0, 3.0), 8.0);
//!
//! // Tag dispatch as used by the HTTP boundary
//! let op = Operation::parse("media").unwrap();
//! assert_eq!(calc.apply(op, &json!([1, 2, 3, 4, 5])).unwrap(), 3.0);
//!
//! // Every successful call lands in the bounded history
//! assert_eq!(calc.history().len(), 2);
//! ```
//!
//! # Operations
//!
//! | Wire name | Parameters | Notes |
//! |-----------|------------|-------|
//! | `sumar` `restar` `multiplicar` `dividir` `potencia` | `[a, b]` | `dividir` rejects a zero divisor |
//! | `raizCuadrada` `seno` `coseno` `tangente` | number | `raizCuadrada` rejects negative input |
//! | `media` `mediana` `maximo` `minimo` | array | non-empty dataset |
//! | `desviacionEstandar` `varianza` | array | sample formulas, at least 2 values |
//! | `evaluarExpresion` | string | evaluated by `evalexpr` |
//! | `convertirTemperatura` | `[value, from, to]` | six directed unit pairs |

pub mod calculator;
pub mod error;
pub mod history;
pub mod memory;
pub mod operation;
pub mod ops;
pub mod params;
pub mod stats;
pub mod temperature;

// Re-exports for convenience
pub use calculator::Calculator;
pub use error::{CalcError, Result};
pub use history::{HistoryEntry, HistoryLog, MAX_ENTRIES};
pub use memory::MemoryRegister;
pub use operation::{MemoryAction, Operation};
pub use temperature::TemperatureUnit;
