//! API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use calc_charts::text_to_base64;
use calcsrv::api::routes::create_router;
use calcsrv::{AppState, Config};
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Fresh router with its own calculator state
fn test_app() -> axum::Router {
    create_router(AppState::new(Config::default()))
}

/// Helper to make JSON requests
async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = if let Some(json) = body {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap()
    } else {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = json_request(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "calcsrv");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_operations() {
    let app = test_app();

    let (status, body) = json_request(&app, "GET", "/api/operaciones", None).await;

    assert_eq!(status, StatusCode::OK);
    let operaciones = body["operaciones"].as_array().unwrap();
    assert_eq!(operaciones.len(), 17);
    assert_eq!(operaciones[0], "sumar");
    assert!(operaciones.contains(&json!("convertirTemperatura")));
}

#[tokio::test]
async fn test_calculate_addition() {
    let app = test_app();

    let request = json!({ "operacion": "sumar", "parametros": [5, 3] });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 8.0);

    let historial = body["historial"].as_array().unwrap();
    assert_eq!(historial.len(), 1);
    assert_eq!(historial[0]["operacion"], "5 + 3 = 8");
    assert!(historial[0]["timestamp"].is_string());
}

#[tokio::test]
async fn test_calculate_statistics() {
    let app = test_app();

    let request = json!({ "operacion": "media", "parametros": [1, 2, 3, 4, 5] });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 3.0);
}

#[tokio::test]
async fn test_calculate_expression() {
    let app = test_app();

    let request = json!({ "operacion": "evaluarExpresion", "parametros": "2 + 3 * 4" });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 14.0);
}

#[tokio::test]
async fn test_calculate_temperature() {
    let app = test_app();

    let request = json!({
        "operacion": "convertirTemperatura",
        "parametros": [25, "celsius", "fahrenheit"]
    });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 77.0);
    assert_eq!(body["historial"][0]["operacion"], "25°C = 77.00°F");
}

#[tokio::test]
async fn test_unknown_operation() {
    let app = test_app();

    let request = json!({ "operacion": "factorial", "parametros": [5] });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Operación no válida");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_division_by_zero() {
    let app = test_app();

    let request = json!({ "operacion": "dividir", "parametros": [10, 0] });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Division by zero");
}

#[tokio::test]
async fn test_missing_parameters() {
    let app = test_app();

    let request = json!({ "operacion": "sumar" });
    let (status, body) = json_request(&app, "POST", "/api/calcular", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid parameters"));
}

#[tokio::test]
async fn test_history_roundtrip() {
    let app = test_app();

    for parametros in [[5, 3], [10, 4]] {
        let request = json!({ "operacion": "sumar", "parametros": parametros });
        json_request(&app, "POST", "/api/calcular", Some(request)).await;
    }

    let (status, body) = json_request(&app, "GET", "/api/historial", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["historial"].as_array().unwrap().len(), 2);

    let (status, body) = json_request(&app, "DELETE", "/api/historial", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Historial limpiado");

    let (_, body) = json_request(&app, "GET", "/api/historial", None).await;
    assert!(body["historial"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_cycle() {
    let app = test_app();

    let request = json!({ "accion": "guardar", "valor": 42.5 });
    let (status, body) = json_request(&app, "POST", "/api/memoria", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 42.5);
    assert_eq!(body["historial"][0]["operacion"], "Guardado en memoria: 42.5");

    let request = json!({ "accion": "obtener" });
    let (status, body) = json_request(&app, "POST", "/api/memoria", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 42.5);
    // reading records nothing: still only the save entry
    assert_eq!(body["historial"].as_array().unwrap().len(), 1);

    let request = json!({ "accion": "limpiar" });
    let (status, body) = json_request(&app, "POST", "/api/memoria", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultado"], 0.0);
}

#[tokio::test]
async fn test_unknown_memory_action() {
    let app = test_app();

    let request = json!({ "accion": "duplicar" });
    let (status, body) = json_request(&app, "POST", "/api/memoria", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Acción no válida");
}

#[tokio::test]
async fn test_memory_save_requires_value() {
    let app = test_app();

    let request = json!({ "accion": "guardar" });
    let (status, body) = json_request(&app, "POST", "/api/memoria", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("valor"));
}

#[tokio::test]
async fn test_bar_chart_response_encoding() {
    let app = test_app();

    let request = json!({
        "datos": { "values": [30, 20], "labels": ["A", "B"] },
        "titulo": "Ventas"
    });
    let (status, body) = json_request(&app, "POST", "/api/graficas/barras", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    let texto = body["texto"].as_str().unwrap();
    assert!(texto.contains("Ventas"));
    assert!(texto.contains('█'));
    assert_eq!(body["imagen"], text_to_base64(texto));
}

#[tokio::test]
async fn test_all_chart_endpoints() {
    let app = test_app();

    let cases = [
        (
            "/api/graficas/barras",
            json!({ "datos": { "values": [30, 20], "labels": ["A", "B"] } }),
        ),
        ("/api/graficas/lineas", json!({ "datos": [1, 3, 2] })),
        (
            "/api/graficas/circular",
            json!({ "datos": { "values": [30, 20, 50] } }),
        ),
        (
            "/api/graficas/histograma",
            json!({ "datos": [1, 2, 2, 3, 3, 3, 4, 4, 5] }),
        ),
        ("/api/graficas/dispersion", json!({ "datos": [10, 5] })),
        ("/api/graficas/estadisticas", json!({ "datos": [1, 2, 3, 4, 5] })),
    ];

    for (uri, request) in cases {
        let (status, body) = json_request(&app, "POST", uri, Some(request)).await;

        assert_eq!(status, StatusCode::OK, "chart endpoint {} failed", uri);
        assert!(!body["texto"].as_str().unwrap().is_empty());
        assert!(!body["imagen"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_histogram_rejects_empty_series() {
    let app = test_app();

    let request = json!({ "datos": [] });
    let (status, body) =
        json_request(&app, "POST", "/api/graficas/histograma", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Empty input"));
}

#[tokio::test]
async fn test_empty_series_renders_placeholder() {
    let app = test_app();

    let request = json!({ "datos": [] });
    let (status, body) = json_request(&app, "POST", "/api/graficas/barras", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["texto"], "No hay datos para mostrar");
}

#[tokio::test]
async fn test_chart_rejects_malformed_datos() {
    let app = test_app();

    let request = json!({ "datos": "datos inválidos" });
    let (status, body) = json_request(&app, "POST", "/api/graficas/barras", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_malformed_bodies_use_error_envelope() {
    let app = test_app();

    let cases = [
        ("/api/calcular", json!({ "operacion": 5, "parametros": [1, 2] })),
        ("/api/memoria", json!({ "accion": "guardar", "valor": "cuarenta" })),
        ("/api/graficas/histograma", json!({ "datos": { "x": 1 } })),
    ];

    for (uri, request) in cases {
        let (status, body) = json_request(&app, "POST", uri, Some(request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "endpoint {} accepted a bad body", uri);
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert_eq!(body["status"], 400);
    }
}
