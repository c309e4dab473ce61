// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::directive::BuildConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to test a path against the file a config would produce
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub config: BuildConfig,
    /// Path (`/private/a.html`) or absolute URL to test
    pub target: String,
    /// Crawler name to test as; defaults to the config's user agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// What a crawler would conclude after reading the generated file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheck {
    pub target: String,
    pub user_agent: String,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<f32>,
    pub sitemaps: Vec<String>,
}
