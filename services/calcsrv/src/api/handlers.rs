//! API handlers for the calculator service

use axum::{extract::State, response::Json};
use serde_json::json;
use tracing::{debug, info};

use crate::api::extract::AppJson;
use crate::api::models::*;
use crate::error::Result;
use crate::AppState;
use calc_charts::ChartBuffer;
use calc_engine::{CalcError, MemoryAction, Operation};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": state.config.service.name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// List the supported operation names
pub async fn list_operations() -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operaciones: Operation::ALL.iter().map(|op| op.name()).collect(),
    })
}

// === Calculation ===

/// Run one calculation and return the result with the updated history
pub async fn calculate(
    State(state): State<AppState>,
    AppJson(request): AppJson<CalculateRequest>,
) -> Result<Json<CalculateResponse>> {
    let operation = Operation::parse(&request.operacion)
        .ok_or_else(|| CalcError::unknown_operation(request.operacion.as_str()))?;

    let mut calculator = state.calculator.write().await;
    let resultado = calculator.apply(operation, &request.parametros)?;

    info!("Calculated {}: {}", operation.name(), resultado);
    Ok(Json(CalculateResponse {
        resultado,
        historial: calculator.history(),
    }))
}

// === History ===

/// Current history snapshot
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let calculator = state.calculator.read().await;
    Json(HistoryResponse {
        historial: calculator.history(),
    })
}

/// Empty the history
pub async fn clear_history(State(state): State<AppState>) -> Json<MessageResponse> {
    let mut calculator = state.calculator.write().await;
    let mensaje = calculator.clear_history().to_string();

    info!("History cleared");
    Json(MessageResponse { mensaje })
}

// === Memory ===

/// Apply a memory action
pub async fn memory(
    State(state): State<AppState>,
    AppJson(request): AppJson<MemoryRequest>,
) -> Result<Json<CalculateResponse>> {
    let action = MemoryAction::parse(&request.accion)
        .ok_or_else(|| CalcError::unknown_action(request.accion.as_str()))?;

    // the read action never mutates, so it shares the read guard
    let (resultado, historial) = match action {
        MemoryAction::Read => {
            let calculator = state.calculator.read().await;
            (calculator.memory_read(), calculator.history())
        }
        _ => {
            let mut calculator = state.calculator.write().await;
            let resultado = calculator.apply_memory(action, request.valor)?;
            (resultado, calculator.history())
        }
    };

    info!("Memory {}: {}", action.name(), resultado);
    Ok(Json(CalculateResponse { resultado, historial }))
}

// === Charts ===

fn chart_response(buffer: ChartBuffer) -> Json<ChartResponse> {
    Json(ChartResponse {
        texto: buffer.as_text().into_owned(),
        imagen: buffer.to_base64(),
    })
}

/// Render a bar chart
pub async fn bar_chart(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChartRequest>,
) -> Result<Json<ChartResponse>> {
    let buffer = state.renderer.bar(&request.datos, request.titulo.as_deref())?;
    debug!("Rendered bar chart");
    Ok(chart_response(buffer))
}

/// Render a line chart
pub async fn line_chart(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChartRequest>,
) -> Result<Json<ChartResponse>> {
    let buffer = state
        .renderer
        .line(&request.datos, request.titulo.as_deref())?;
    debug!("Rendered line chart");
    Ok(chart_response(buffer))
}

/// Render a text pie chart
pub async fn pie_chart(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChartRequest>,
) -> Result<Json<ChartResponse>> {
    let buffer = state.renderer.pie(&request.datos, request.titulo.as_deref())?;
    debug!("Rendered pie chart");
    Ok(chart_response(buffer))
}

/// Render a histogram over a flat series
pub async fn histogram_chart(
    State(state): State<AppState>,
    AppJson(request): AppJson<SeriesChartRequest>,
) -> Result<Json<ChartResponse>> {
    let buffer = state
        .renderer
        .histogram(&request.datos, request.titulo.as_deref())?;
    debug!("Rendered histogram");
    Ok(chart_response(buffer))
}

/// Render a scatter listing
pub async fn scatter_chart(
    State(state): State<AppState>,
    AppJson(request): AppJson<ChartRequest>,
) -> Result<Json<ChartResponse>> {
    let buffer = state
        .renderer
        .scatter(&request.datos, request.titulo.as_deref())?;
    debug!("Rendered scatter chart");
    Ok(chart_response(buffer))
}

/// Render the descriptive statistics summary
pub async fn stats_chart(
    State(state): State<AppState>,
    AppJson(request): AppJson<SeriesChartRequest>,
) -> Result<Json<ChartResponse>> {
    let buffer = state
        .renderer
        .summary(&request.datos, request.titulo.as_deref())?;
    debug!("Rendered statistics summary");
    Ok(chart_response(buffer))
}
