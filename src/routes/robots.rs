// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! robots.txt generation route handlers.

use crate::app::AppState;
use crate::models::check::{AccessCheck, CheckRequest};
use crate::models::directive::{BuildConfig, Directive, DirectiveKind};
use crate::models::review::{Advisory, AdvisoryCode, ReviewResponse, Severity};
use crate::services::advisor::review;
use crate::services::logging::truncate_for_log;
use crate::services::preview::check_access;
use crate::services::robots_builder::{build_robots_txt, CONTENT_TYPE, DOWNLOAD_FILE_NAME};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

const LOG_FIELD_MAX_CHARS: usize = 64;

/// OpenAPI document for the `/robots` routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        defaults_handler,
        build_handler,
        download_handler,
        review_handler,
        check_handler
    ),
    components(schemas(
        BuildConfig,
        Directive,
        DirectiveKind,
        ReviewResponse,
        Advisory,
        AdvisoryCode,
        Severity,
        CheckRequest,
        AccessCheck
    )),
    tags((name = "robots", description = "robots.txt generation"))
)]
pub struct RobotsApiDoc;

/// Create the router mounted under `/robots`.
pub fn robots_router() -> Router<AppState> {
    Router::new()
        .route("/defaults", get(defaults_handler))
        .route("/build", post(build_handler))
        .route("/download", post(download_handler))
        .route("/review", post(review_handler))
        .route("/check", post(check_handler))
}

fn text_content_type() -> String {
    format!("{CONTENT_TYPE}; charset=utf-8")
}

fn log_build(config: &BuildConfig, bytes: usize) {
    tracing::info!(
        user_agent = %truncate_for_log(&config.user_agent, LOG_FIELD_MAX_CHARS),
        directives = config.directives.len(),
        crawl_delay = ?config.crawl_delay,
        has_sitemap = !config.sitemap.trim().is_empty(),
        bytes,
        "built robots.txt"
    );
}

/// GET /robots/defaults - Starting values for a new file.
#[utoipa::path(
    get,
    path = "/robots/defaults",
    tag = "robots",
    responses((status = 200, description = "Default generator values", body = BuildConfig))
)]
async fn defaults_handler(State(state): State<AppState>) -> Json<BuildConfig> {
    Json(state.defaults.as_ref().clone())
}

/// POST /robots/build - Render the file as plain text.
#[utoipa::path(
    post,
    path = "/robots/build",
    tag = "robots",
    request_body = BuildConfig,
    responses((status = 200, description = "Generated robots.txt", body = String, content_type = "text/plain"))
)]
async fn build_handler(Json(config): Json<BuildConfig>) -> impl IntoResponse {
    let body = build_robots_txt(&config);
    log_build(&config, body.len());
    ([(header::CONTENT_TYPE, text_content_type())], body)
}

/// POST /robots/download - Render the file as a `robots.txt` attachment.
#[utoipa::path(
    post,
    path = "/robots/download",
    tag = "robots",
    request_body = BuildConfig,
    responses((status = 200, description = "robots.txt attachment", body = String, content_type = "text/plain"))
)]
async fn download_handler(Json(config): Json<BuildConfig>) -> impl IntoResponse {
    let body = build_robots_txt(&config);
    log_build(&config, body.len());
    (
        [
            (header::CONTENT_TYPE, text_content_type()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        body,
    )
}

/// POST /robots/review - List likely mistakes without changing the output.
#[utoipa::path(
    post,
    path = "/robots/review",
    tag = "robots",
    request_body = BuildConfig,
    responses((status = 200, description = "Advisories for the config", body = ReviewResponse))
)]
async fn review_handler(Json(config): Json<BuildConfig>) -> Json<ReviewResponse> {
    let advisories = review(&config);
    let count = advisories.len();
    tracing::debug!(count, "reviewed robots.txt config");
    Json(ReviewResponse { advisories, count })
}

/// POST /robots/check - Test a path against the generated file.
#[utoipa::path(
    post,
    path = "/robots/check",
    tag = "robots",
    request_body = CheckRequest,
    responses(
        (status = 200, description = "Access decision", body = AccessCheck),
        (status = 422, description = "Generated file could not be parsed")
    )
)]
async fn check_handler(
    Json(payload): Json<CheckRequest>,
) -> Result<Json<AccessCheck>, (StatusCode, String)> {
    check_access(&payload).map(Json).map_err(check_failed)
}

/// Parser rejection of the generated file becomes a 422.
fn check_failed(e: anyhow::Error) -> (StatusCode, String) {
    tracing::warn!(error = %e, "access check failed");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("Access check failed: {e:#}"),
    )
}
