// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use robots_gen::app::{create_router, AppState, VERSION};
use robots_gen::models::directive::{BuildConfig, Directive, DirectiveKind};
use robots_gen::services::advisor::review;
use robots_gen::services::logging::setup_logging;
use robots_gen::services::robots_builder::build_robots_txt;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "robots-gen")]
#[command(about = "Compose robots.txt files", version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Render a robots.txt file from flags and/or a JSON config
    Generate(GenerateArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
    /// Do not mount Swagger UI
    #[arg(
        long,
        env = "DISABLE_SWAGGER",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    no_swagger: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON file with {userAgent, directives, sitemap, crawlDelay}
    #[arg(short, long, value_parser = validate_input_file)]
    config: Option<PathBuf>,
    /// Crawler the rules apply to (default '*')
    #[arg(short, long)]
    user_agent: Option<String>,
    /// Rule as KIND:PATH, e.g. disallow:/wp-admin/ (repeatable, order kept)
    #[arg(short, long = "rule", value_parser = parse_rule)]
    rules: Vec<Directive>,
    /// Sitemap URL
    #[arg(short, long)]
    sitemap: Option<String>,
    /// Crawl-delay in seconds
    #[arg(short = 'd', long)]
    crawl_delay: Option<u64>,
    /// Write the file here instead of stdout
    #[arg(short, long, value_parser = validate_output_file)]
    output: Option<PathBuf>,
    /// Print advisories about likely mistakes to stderr
    #[arg(long)]
    review: bool,
}

/// Parse `KIND:PATH`; the path may be empty and keeps everything after the
/// first ':' except leading whitespace.
fn parse_rule(s: &str) -> Result<Directive, String> {
    let (kind, path) = s
        .split_once(':')
        .ok_or_else(|| format!("Rule must look like KIND:PATH, got: {s}"))?;
    let kind = DirectiveKind::parse(kind.trim())
        .ok_or_else(|| format!("Rule kind must be 'allow' or 'disallow', got: {kind}"))?;
    Ok(Directive {
        kind,
        path: path.trim_start().to_string(),
    })
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.is_file() {
        return Err(format!("Config path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(format!(
                "Output file parent directory does not exist: {}",
                parent.display()
            ));
        }
    }

    Ok(path)
}

/// Base config from `--config` (or an empty `*` config), with flags applied on top.
fn resolve_config(args: &GenerateArgs) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read config file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => BuildConfig::new("*"),
    };

    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    config.directives.extend(args.rules.iter().cloned());
    if let Some(sitemap) = &args.sitemap {
        config.sitemap = sitemap.clone();
    }
    if args.crawl_delay.is_some() {
        config.crawl_delay = args.crawl_delay;
    }

    Ok(config)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let content = build_robots_txt(&config);

    if args.review {
        for advisory in review(&config) {
            eprintln!("{:?}: {}", advisory.severity, advisory.message);
        }
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "wrote robots.txt");
        }
        None => println!("{content}"),
    }

    Ok(())
}

async fn serve(args: ServeArgs) -> Result<()> {
    let app = create_router(AppState::new(!args.no_swagger));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    tracing::info!("robots-gen v{} listening on {}", VERSION, args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            setup_logging("robots_gen=info,tower_http=info");
            serve(args).await
        }
        Commands::Generate(args) => {
            setup_logging("warn");
            generate(args)
        }
    }
}
