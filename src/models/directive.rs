// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether a rule permits or forbids crawling of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DirectiveKind {
    Allow,
    Disallow,
}

impl DirectiveKind {
    /// Field name as it appears in a robots.txt line.
    pub fn label(&self) -> &'static str {
        match self {
            DirectiveKind::Allow => "Allow",
            DirectiveKind::Disallow => "Disallow",
        }
    }

    /// Case-insensitive parse of `allow` / `disallow`.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("allow") {
            Some(DirectiveKind::Allow)
        } else if s.eq_ignore_ascii_case("disallow") {
            Some(DirectiveKind::Disallow)
        } else {
            None
        }
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single Allow or Disallow rule.
///
/// `path` is opaque: it may be empty, may carry `*` / `$` wildcards and is
/// never checked for a leading slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Directive {
    #[serde(rename = "type")]
    pub kind: DirectiveKind,
    #[serde(default)]
    pub path: String,
}

impl Directive {
    pub fn allow(path: impl Into<String>) -> Self {
        Self {
            kind: DirectiveKind::Allow,
            path: path.into(),
        }
    }

    pub fn disallow(path: impl Into<String>) -> Self {
        Self {
            kind: DirectiveKind::Disallow,
            path: path.into(),
        }
    }
}

/// Everything needed to render one robots.txt file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Crawler the rules apply to. Defaults to `*` when omitted from JSON.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub directives: Vec<Directive>,
    /// Sitemap URL; blank means no `Sitemap:` line.
    #[serde(default)]
    pub sitemap: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_delay: Option<u64>,
}

pub fn default_user_agent() -> String {
    "*".to_string()
}

impl BuildConfig {
    /// A config with no rules, no sitemap and no crawl delay.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            directives: Vec::new(),
            sitemap: String::new(),
            crawl_delay: None,
        }
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn with_sitemap(mut self, sitemap: impl Into<String>) -> Self {
        self.sitemap = sitemap.into();
        self
    }

    pub fn with_crawl_delay(mut self, delay: u64) -> Self {
        self.crawl_delay = Some(delay);
        self
    }
}
