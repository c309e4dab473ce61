// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Review of a [`BuildConfig`] for common robots.txt mistakes.
//!
//! The builder renders whatever it is given; this module only reports. A
//! config with advisories renders exactly as one without.

use crate::models::directive::{BuildConfig, DirectiveKind};
use crate::models::review::{Advisory, AdvisoryCode};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Collect advisories for `config`, ordered user agent, rules (input order),
/// crawl delay, sitemap.
pub fn review(config: &BuildConfig) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if config.user_agent.trim().is_empty() {
        advisories.push(Advisory::new(
            AdvisoryCode::EmptyUserAgent,
            "User-agent is blank; use '*' to address all crawlers",
        ));
    }

    review_directives(config, &mut advisories);

    if let Some(delay) = config.crawl_delay {
        advisories.push(Advisory::new(
            AdvisoryCode::CrawlDelayIgnored,
            format!("Crawl-delay: {delay} is ignored by most major crawlers, including Googlebot"),
        ));
    }

    if !config.sitemap.trim().is_empty() && !is_absolute_http_url(config.sitemap.trim()) {
        advisories.push(Advisory::new(
            AdvisoryCode::SitemapNotAbsolute,
            format!(
                "Sitemap '{}' should be an absolute http(s) URL",
                config.sitemap
            ),
        ));
    }

    advisories
}

fn review_directives(config: &BuildConfig, advisories: &mut Vec<Advisory>) {
    let mut seen: HashSet<(DirectiveKind, &str)> = HashSet::new();
    // path -> kind of its first occurrence
    let mut first_kind: HashMap<&str, DirectiveKind> = HashMap::new();

    for (index, directive) in config.directives.iter().enumerate() {
        let path = directive.path.as_str();

        if !path.is_empty() && !path.starts_with('/') && !path.starts_with('*') {
            advisories.push(
                Advisory::new(
                    AdvisoryCode::PathMissingLeadingSlash,
                    format!("Path '{path}' should start with '/'"),
                )
                .at(index),
            );
        }

        if directive.kind == DirectiveKind::Disallow && path == "/" {
            advisories.push(
                Advisory::new(
                    AdvisoryCode::BlocksEntireSite,
                    format!(
                        "'Disallow: /' blocks the entire site for '{}'",
                        config.user_agent
                    ),
                )
                .at(index),
            );
        }

        if !seen.insert((directive.kind, path)) {
            advisories.push(
                Advisory::new(
                    AdvisoryCode::DuplicateDirective,
                    format!("'{}: {path}' is listed more than once", directive.kind),
                )
                .at(index),
            );
            continue;
        }

        match first_kind.entry(path) {
            Entry::Occupied(first) if *first.get() != directive.kind => advisories.push(
                Advisory::new(
                    AdvisoryCode::ConflictingDirective,
                    format!("'{path}' is both allowed and disallowed"),
                )
                .at(index),
            ),
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(directive.kind);
            }
        }
    }
}

fn is_absolute_http_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}
