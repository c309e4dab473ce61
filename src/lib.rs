// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! robots.txt generation: a pure builder plus the HTTP and CLI surfaces around it.
//!
//! ```
//! use robots_gen::models::directive::{BuildConfig, Directive};
//! use robots_gen::services::robots_builder::build_robots_txt;
//!
//! let config = BuildConfig::new("*").with_directive(Directive::disallow("/tmp/"));
//! assert_eq!(build_robots_txt(&config), "User-agent: *\nDisallow: /tmp/");
//! ```

pub mod app;
pub mod models;
pub mod routes;
pub mod services;
