// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Serialization of a [`BuildConfig`] into robots.txt text.

use crate::models::directive::BuildConfig;

/// File name offered for downloads.
pub const DOWNLOAD_FILE_NAME: &str = "robots.txt";

/// MIME type of the generated file.
pub const CONTENT_TYPE: &str = "text/plain";

/// Render the robots.txt body for `config`.
///
/// Layout, one item per line:
///
/// ```text
/// User-agent: <user agent>
/// <Allow|Disallow>: <path>      (one per directive, input order)
/// Crawl-delay: <n>              (only when set)
///
/// Sitemap: <url>                (only when not blank)
/// ```
///
/// Lines are joined with `\n` and there is no trailing newline. Nothing is
/// validated or deduplicated, so the same config always yields the same bytes.
pub fn build_robots_txt(config: &BuildConfig) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(config.directives.len() + 4);

    lines.push(format!("User-agent: {}", config.user_agent));

    for directive in &config.directives {
        lines.push(format!("{}: {}", directive.kind.label(), directive.path));
    }

    if let Some(delay) = config.crawl_delay {
        lines.push(format!("Crawl-delay: {}", delay));
    }

    if !config.sitemap.trim().is_empty() {
        lines.push(String::new());
        lines.push(format!("Sitemap: {}", config.sitemap));
    }

    tracing::trace!(lines = lines.len(), "rendered robots.txt");

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::directive::Directive;

    fn wordpress_config() -> BuildConfig {
        BuildConfig::new("*")
            .with_directive(Directive::disallow("/wp-admin/"))
            .with_directive(Directive::allow("/wp-admin/admin-ajax.php"))
            .with_sitemap("https://doodax.com/sitemap.xml")
    }

    #[test]
    fn test_user_agent_only() {
        assert_eq!(build_robots_txt(&BuildConfig::new("*")), "User-agent: *");
    }

    #[test]
    fn test_empty_user_agent_is_emitted_verbatim() {
        assert_eq!(build_robots_txt(&BuildConfig::new("")), "User-agent: ");
    }

    #[test]
    fn test_wordpress_scenario() {
        let expected = "User-agent: *\n\
                        Disallow: /wp-admin/\n\
                        Allow: /wp-admin/admin-ajax.php\n\
                        \n\
                        Sitemap: https://doodax.com/sitemap.xml";
        assert_eq!(build_robots_txt(&wordpress_config()), expected);
    }

    #[test]
    fn test_crawl_delay_sits_between_rules_and_sitemap() {
        let config = wordpress_config().with_crawl_delay(5);
        let expected = "User-agent: *\n\
                        Disallow: /wp-admin/\n\
                        Allow: /wp-admin/admin-ajax.php\n\
                        Crawl-delay: 5\n\
                        \n\
                        Sitemap: https://doodax.com/sitemap.xml";
        assert_eq!(build_robots_txt(&config), expected);
    }

    #[test]
    fn test_crawl_delay_zero_is_still_emitted() {
        let config = BuildConfig::new("*").with_crawl_delay(0);
        assert_eq!(build_robots_txt(&config), "User-agent: *\nCrawl-delay: 0");
    }

    #[test]
    fn test_empty_path_keeps_trailing_space() {
        let config = BuildConfig::new("*").with_directive(Directive::disallow(""));
        let output = build_robots_txt(&config);
        assert_eq!(output, "User-agent: *\nDisallow: ");
        assert!(output.lines().any(|line| line == "Disallow: "));
    }

    #[test]
    fn test_blank_sitemap_is_omitted() {
        for sitemap in ["", " ", "\t\n  "] {
            let config = BuildConfig::new("*").with_sitemap(sitemap);
            assert_eq!(build_robots_txt(&config), "User-agent: *");
        }
    }

    #[test]
    fn test_sitemap_is_emitted_untrimmed() {
        let config = BuildConfig::new("*").with_sitemap(" https://example.com/s.xml");
        assert_eq!(
            build_robots_txt(&config),
            "User-agent: *\n\nSitemap:  https://example.com/s.xml"
        );
    }

    #[test]
    fn test_no_validation_or_deduplication() {
        let config = BuildConfig::new("bot")
            .with_directive(Directive::disallow("no-slash"))
            .with_directive(Directive::disallow("no-slash"))
            .with_directive(Directive::allow("no-slash"))
            .with_directive(Directive::disallow("/*.pdf$"))
            .with_sitemap("not a url");

        let expected = "User-agent: bot\n\
                        Disallow: no-slash\n\
                        Disallow: no-slash\n\
                        Allow: no-slash\n\
                        Disallow: /*.pdf$\n\
                        \n\
                        Sitemap: not a url";
        assert_eq!(build_robots_txt(&config), expected);
    }

    #[test]
    fn test_output_has_no_trailing_newline() {
        assert!(!build_robots_txt(&wordpress_config()).ends_with('\n'));
    }

    #[test]
    fn test_same_input_same_bytes() {
        let config = wordpress_config().with_crawl_delay(3);
        assert_eq!(build_robots_txt(&config), build_robots_txt(&config.clone()));
    }
}
