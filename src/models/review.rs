// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

/// Kind of pitfall an [`Advisory`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCode {
    EmptyUserAgent,
    PathMissingLeadingSlash,
    BlocksEntireSite,
    DuplicateDirective,
    ConflictingDirective,
    SitemapNotAbsolute,
    CrawlDelayIgnored,
}

impl AdvisoryCode {
    pub fn severity(&self) -> Severity {
        match self {
            AdvisoryCode::DuplicateDirective
            | AdvisoryCode::ConflictingDirective
            | AdvisoryCode::CrawlDelayIgnored => Severity::Info,
            AdvisoryCode::EmptyUserAgent
            | AdvisoryCode::PathMissingLeadingSlash
            | AdvisoryCode::BlocksEntireSite
            | AdvisoryCode::SitemapNotAbsolute => Severity::Warning,
        }
    }
}

/// A non-blocking note about a likely mistake. Never changes the rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub code: AdvisoryCode,
    pub severity: Severity,
    pub message: String,
    /// Position of the offending rule in the input list, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive_index: Option<usize>,
}

impl Advisory {
    pub fn new(code: AdvisoryCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            directive_index: None,
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.directive_index = Some(index);
        self
    }
}

/// Response for a review request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub advisories: Vec<Advisory>,
    pub count: usize,
}
