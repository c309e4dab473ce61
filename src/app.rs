// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, top-level handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::models::directive::BuildConfig;
use crate::models::form::GeneratorForm;
use crate::models::version::VersionResponse;
use crate::routes::{robots_router, RobotsApiDoc};
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `ROBOTS_GEN_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("ROBOTS_GEN_VERSION");

pub const SERVICE_NAME: &str = "robots-gen";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
///
/// Read-only: requests never share or keep generator values.
#[derive(Clone)]
pub struct AppState {
    /// Values served by `/robots/defaults`.
    pub defaults: Arc<BuildConfig>,
    /// Mount Swagger UI at `/swagger-ui`.
    pub swagger_enabled: bool,
}

impl AppState {
    pub fn new(swagger_enabled: bool) -> Self {
        Self {
            defaults: Arc::new(GeneratorForm::default().to_build_config()),
            swagger_enabled,
        }
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router.
///
/// Swagger UI and the OpenAPI document are mounted when `state.swagger_enabled`.
pub fn create_router(state: AppState) -> Router {
    let swagger_enabled = state.swagger_enabled;

    let mut app = Router::new()
        .route("/version", get(version_handler))
        .nest("/robots", robots_router())
        .with_state(state);

    if swagger_enabled {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", RobotsApiDoc::openapi()),
        );
    }

    app.layer(TraceLayer::new_for_http())
}
