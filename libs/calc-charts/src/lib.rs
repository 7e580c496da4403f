//! calc-charts - ASCII chart rendering for Calculadora Avanzada
//!
//! Renders numeric series as fixed-width text charts suitable for
//! terminals and `<pre>` blocks. Six chart kinds are supported:
//!
//! - Bar: one scaled `█` bar per value
//! - Line: 10-row plot with `●` markers and `─` connectors
//! - Pie: shaded bars proportional to each value's share of the total
//! - Histogram: frequency counts over uniform bins
//! - Scatter: per-point listing with a max/min/range summary
//! - Summary: the engine's descriptive statistics as labelled bars
//!
//! Renderings travel as [`ChartBuffer`], which exposes both the text
//! itself and a base64 encoding for JSON transport.
//!
//! # Example
//!
//! ```
//! use calc_charts::{ChartData, ChartRenderer};
//!
//! let renderer = ChartRenderer::new();
//! let data = ChartData::from(vec![30.0, 20.0, 50.0]);
//! let buffer = renderer.bar(&data, Some("Ventas")).unwrap();
//! assert!(buffer.as_text().contains("Ventas"));
//! ```

pub mod buffer;
pub mod error;
pub mod render;
pub mod series;

pub use buffer::{text_to_base64, ChartBuffer};
pub use error::{ChartError, Result};
pub use render::{ChartRenderer, NO_DATA_MESSAGE};
pub use series::ChartData;
