//! API routes configuration

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::handlers::*;
use crate::AppState;

/// Create API routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/operaciones", get(list_operations))
        .route("/api/calcular", post(calculate))
        .route("/api/historial", get(get_history).delete(clear_history))
        .route("/api/memoria", post(memory))
        .route("/api/graficas/barras", post(bar_chart))
        .route("/api/graficas/lineas", post(line_chart))
        .route("/api/graficas/circular", post(pie_chart))
        .route("/api/graficas/histograma", post(histogram_chart))
        .route("/api/graficas/dispersion", post(scatter_chart))
        .route("/api/graficas/estadisticas", post(stats_chart))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
