//! Calculator Service Library
//!
//! This module exports the public API for the calculator service.

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ApiError, Result};

use calc_charts::ChartRenderer;
use calc_engine::Calculator;

/// Application state
///
/// One shared calculator behind a coarse lock; mutating requests take the
/// write guard, history reads the read guard. The renderer is stateless.
#[derive(Clone)]
pub struct AppState {
    pub calculator: std::sync::Arc<tokio::sync::RwLock<Calculator>>,
    pub renderer: std::sync::Arc<ChartRenderer>,
    pub config: std::sync::Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            calculator: std::sync::Arc::new(tokio::sync::RwLock::new(Calculator::new())),
            renderer: std::sync::Arc::new(ChartRenderer::new()),
            config: std::sync::Arc::new(config),
        }
    }
}
