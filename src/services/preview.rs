// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Crawler's-eye view of a generated file, using the same robots.txt parser a
//! crawler would.

use crate::models::check::{AccessCheck, CheckRequest};
use crate::services::robots_builder::build_robots_txt;
use anyhow::{Context, Result};
use texting_robots::Robot;
use url::{Position, Url};

/// Render `request.config` and report whether `request.target` may be fetched.
pub fn check_access(request: &CheckRequest) -> Result<AccessCheck> {
    let content = build_robots_txt(&request.config);
    let user_agent = effective_user_agent(request);

    let robot = Robot::new(&user_agent, content.as_bytes())
        .with_context(|| format!("Failed to parse generated robots.txt for '{user_agent}'"))?;

    let path = request_path(&request.target);
    let allowed = robot.allowed(&path);

    tracing::debug!(
        user_agent = %user_agent,
        path = %path,
        allowed,
        "checked access against generated robots.txt"
    );

    Ok(AccessCheck {
        target: request.target.clone(),
        user_agent,
        allowed,
        crawl_delay: robot.delay,
        sitemaps: robot.sitemaps.clone(),
    })
}

fn effective_user_agent(request: &CheckRequest) -> String {
    let candidate = request
        .user_agent
        .as_deref()
        .unwrap_or(&request.config.user_agent)
        .trim();

    if candidate.is_empty() {
        "*".to_string()
    } else {
        candidate.to_string()
    }
}

/// Reduce an absolute URL to path + query; anything else is used as given,
/// with a leading slash added when missing.
fn request_path(target: &str) -> String {
    let target = target.trim();
    match Url::parse(target) {
        Ok(url) if url.has_host() => url[Position::BeforePath..].to_string(),
        _ if target.starts_with('/') => target.to_string(),
        _ => format!("/{target}"),
    }
}
