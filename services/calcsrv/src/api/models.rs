//! API request and response models
//!
//! Field names are the Spanish wire contract (`operacion`, `parametros`,
//! `historial`, ...) and must not be renamed.

use calc_charts::ChartData;
use calc_engine::HistoryEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Calculation request: an operation tag plus loosely-typed parameters
///
/// `parametros` stays a raw JSON value here; each operation decodes the
/// shape it needs during dispatch.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub operacion: String,
    #[serde(default)]
    pub parametros: Value,
}

/// Calculation response: the result plus the history snapshot after it
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub resultado: f64,
    pub historial: Vec<HistoryEntry>,
}

/// Supported operation names, in API order
#[derive(Debug, Serialize)]
pub struct OperationsResponse {
    pub operaciones: Vec<&'static str>,
}

/// History snapshot
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub historial: Vec<HistoryEntry>,
}

/// Fixed confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

/// Memory register request; `valor` is only required for `guardar`
#[derive(Debug, Deserialize)]
pub struct MemoryRequest {
    pub accion: String,
    pub valor: Option<f64>,
}

/// Chart request for the labeled renderers (bar, line, pie, scatter)
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    pub datos: ChartData,
    pub titulo: Option<String>,
}

/// Chart request for the flat-series renderers (histogram, statistics)
#[derive(Debug, Deserialize)]
pub struct SeriesChartRequest {
    pub datos: Vec<f64>,
    pub titulo: Option<String>,
}

/// Rendered chart: the text art and its base64 encoding
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub texto: String,
    pub imagen: String,
}
