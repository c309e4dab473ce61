// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Editable generator state: the values a user is working on, with stable row
//! ids so individual rules can be edited or removed.

use crate::models::directive::{BuildConfig, Directive, DirectiveKind};
use crate::services::robots_builder::build_robots_txt;

/// A directive row with an id that survives edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDirective {
    pub id: u64,
    pub kind: DirectiveKind,
    pub path: String,
}

/// Change applied to one row by [`GeneratorForm::update_directive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveUpdate {
    Kind(DirectiveKind),
    Path(String),
}

/// `next_id` is always greater than every row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorForm {
    user_agent: String,
    directives: Vec<FormDirective>,
    sitemap: String,
    crawl_delay: Option<u64>,
    next_id: u64,
}

impl Default for GeneratorForm {
    /// The values a fresh generator starts with: a WordPress-style admin block
    /// and a sitemap.
    fn default() -> Self {
        Self {
            user_agent: "*".to_string(),
            directives: vec![
                FormDirective {
                    id: 1,
                    kind: DirectiveKind::Disallow,
                    path: "/wp-admin/".to_string(),
                },
                FormDirective {
                    id: 2,
                    kind: DirectiveKind::Allow,
                    path: "/wp-admin/admin-ajax.php".to_string(),
                },
            ],
            sitemap: "https://doodax.com/sitemap.xml".to_string(),
            crawl_delay: None,
            next_id: 3,
        }
    }
}

impl GeneratorForm {
    /// A form with no rules and no sitemap.
    pub fn empty(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            directives: Vec::new(),
            sitemap: String::new(),
            crawl_delay: None,
            next_id: 1,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn directives(&self) -> &[FormDirective] {
        &self.directives
    }

    pub fn sitemap(&self) -> &str {
        &self.sitemap
    }

    pub fn crawl_delay(&self) -> Option<u64> {
        self.crawl_delay
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    pub fn set_sitemap(&mut self, sitemap: impl Into<String>) {
        self.sitemap = sitemap.into();
    }

    pub fn set_crawl_delay(&mut self, delay: Option<u64>) {
        self.crawl_delay = delay;
    }

    /// Set the crawl delay from raw numeric-input text.
    ///
    /// Blank clears the delay. Otherwise the leading integer is used
    /// ("7s" is 7); text without leading digits or a negative number clears it.
    /// Values too large for `u64` saturate to `u64::MAX`.
    pub fn set_crawl_delay_input(&mut self, input: &str) {
        self.crawl_delay = parse_crawl_delay(input);
    }

    /// Append an empty `Disallow` row and return its id.
    pub fn add_directive(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.directives.push(FormDirective {
            id,
            kind: DirectiveKind::Disallow,
            path: String::new(),
        });
        id
    }

    /// Remove the row with `id`. Returns `false` when no such row exists.
    pub fn remove_directive(&mut self, id: u64) -> bool {
        let before = self.directives.len();
        self.directives.retain(|d| d.id != id);
        self.directives.len() != before
    }

    /// Returns `false` when no row has `id`.
    pub fn update_directive(&mut self, id: u64, update: DirectiveUpdate) -> bool {
        let Some(row) = self.directives.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        match update {
            DirectiveUpdate::Kind(kind) => row.kind = kind,
            DirectiveUpdate::Path(path) => row.path = path,
        }
        true
    }

    /// Snapshot of the current values, rows in display order.
    pub fn to_build_config(&self) -> BuildConfig {
        BuildConfig {
            user_agent: self.user_agent.clone(),
            directives: self
                .directives
                .iter()
                .map(|d| Directive {
                    kind: d.kind,
                    path: d.path.clone(),
                })
                .collect(),
            sitemap: self.sitemap.clone(),
            crawl_delay: self.crawl_delay,
        }
    }

    pub fn render(&self) -> String {
        build_robots_txt(&self.to_build_config())
    }
}

fn parse_crawl_delay(input: &str) -> Option<u64> {
    let trimmed = input.trim_start();
    let unsigned = match trimmed.strip_prefix('-') {
        Some(rest) => {
            // "-0" is zero, any other negative value is not a delay
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            return match digits.parse::<u64>() {
                Ok(0) => Some(0),
                _ => None,
            };
        }
        None => trimmed.strip_prefix('+').unwrap_or(trimmed),
    };

    let digits: String = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_renders_wordpress_example() {
        let expected = "User-agent: *\n\
                        Disallow: /wp-admin/\n\
                        Allow: /wp-admin/admin-ajax.php\n\
                        \n\
                        Sitemap: https://doodax.com/sitemap.xml";
        assert_eq!(GeneratorForm::default().render(), expected);
    }

    #[test]
    fn test_empty_form_renders_user_agent_only() {
        assert_eq!(GeneratorForm::empty("Bingbot").render(), "User-agent: Bingbot");
    }

    #[test]
    fn test_add_directive_appends_empty_disallow() {
        let mut form = GeneratorForm::default();
        let id = form.add_directive();

        assert_eq!(id, 3);
        let last = form.directives().last().unwrap();
        assert_eq!(last.kind, DirectiveKind::Disallow);
        assert_eq!(last.path, "");
        assert!(form.render().contains("\nDisallow: \n"));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut form = GeneratorForm::empty("*");
        let first = form.add_directive();
        assert!(form.remove_directive(first));
        let second = form.add_directive();
        assert!(second > first);
    }

    #[test]
    fn test_ids_stay_unique_across_edits() {
        let mut form = GeneratorForm::default();
        let added: Vec<u64> = (0..4).map(|_| form.add_directive()).collect();
        assert!(form.remove_directive(added[1]));
        assert!(form.remove_directive(1));
        let late = form.add_directive();

        let ids: Vec<u64> = form.directives().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, added[0], added[2], added[3], late]);
        assert!(late > added[3]);

        // removing one row never takes others with it
        assert!(form.remove_directive(added[2]));
        assert_eq!(form.directives().len(), 4);
    }

    #[test]
    fn test_remove_directive() {
        let mut form = GeneratorForm::default();
        assert!(form.remove_directive(1));
        assert!(!form.remove_directive(1));
        assert_eq!(form.directives().len(), 1);
        assert_eq!(form.directives()[0].id, 2);
    }

    #[test]
    fn test_update_directive_kind_and_path() {
        let mut form = GeneratorForm::default();
        assert!(form.update_directive(2, DirectiveUpdate::Kind(DirectiveKind::Disallow)));
        assert!(form.update_directive(2, DirectiveUpdate::Path("/tmp/".to_string())));

        let config = form.to_build_config();
        assert_eq!(config.directives[1], Directive::disallow("/tmp/"));
    }

    #[test]
    fn test_update_missing_directive_returns_false() {
        let mut form = GeneratorForm::default();
        assert!(!form.update_directive(99, DirectiveUpdate::Path("/x".to_string())));
        assert_eq!(form, GeneratorForm::default());
    }

    #[test]
    fn test_snapshot_preserves_row_order() {
        let mut form = GeneratorForm::empty("*");
        let a = form.add_directive();
        let b = form.add_directive();
        form.update_directive(a, DirectiveUpdate::Path("/a".to_string()));
        form.update_directive(b, DirectiveUpdate::Path("/b".to_string()));
        form.update_directive(b, DirectiveUpdate::Kind(DirectiveKind::Allow));

        let config = form.to_build_config();
        assert_eq!(
            config.directives,
            vec![Directive::disallow("/a"), Directive::allow("/b")]
        );
    }

    #[test]
    fn test_crawl_delay_input_parsing() {
        assert_eq!(parse_crawl_delay(""), None);
        assert_eq!(parse_crawl_delay("   "), None);
        assert_eq!(parse_crawl_delay("5"), Some(5));
        assert_eq!(parse_crawl_delay(" 12"), Some(12));
        assert_eq!(parse_crawl_delay("+4"), Some(4));
        assert_eq!(parse_crawl_delay("7s"), Some(7));
        assert_eq!(parse_crawl_delay("2.9"), Some(2));
        assert_eq!(parse_crawl_delay("0"), Some(0));
        assert_eq!(parse_crawl_delay("-0"), Some(0));
        assert_eq!(parse_crawl_delay("-3"), None);
        assert_eq!(parse_crawl_delay("abc"), None);
        assert_eq!(parse_crawl_delay("+"), None);
    }

    #[test]
    fn test_oversized_crawl_delay_saturates() {
        assert_eq!(parse_crawl_delay("99999999999999999999"), Some(u64::MAX));
        assert_eq!(parse_crawl_delay("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_crawl_delay("-99999999999999999999"), None);
    }

    #[test]
    fn test_set_crawl_delay_input_updates_render() {
        let mut form = GeneratorForm::empty("*");
        form.set_crawl_delay_input("10");
        assert_eq!(form.render(), "User-agent: *\nCrawl-delay: 10");

        form.set_crawl_delay_input("");
        assert_eq!(form.crawl_delay(), None);
        assert_eq!(form.render(), "User-agent: *");
    }

    #[test]
    fn test_setters() {
        let mut form = GeneratorForm::empty("*");
        form.set_user_agent("Googlebot");
        form.set_sitemap("https://example.com/sitemap.xml");
        form.set_crawl_delay(Some(1));

        assert_eq!(form.user_agent(), "Googlebot");
        assert_eq!(form.sitemap(), "https://example.com/sitemap.xml");
        assert_eq!(
            form.render(),
            "User-agent: Googlebot\nCrawl-delay: 1\n\nSitemap: https://example.com/sitemap.xml"
        );
    }
}
