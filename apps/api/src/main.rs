mod audit;
mod cli;
mod config;
mod content;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::{audit_content_balance, ContentAuditor};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::content::source_from_path;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("content_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Audit { data, json } => {
            let data = audit_data_path(data, &config);
            let passed = run_audit(data.as_deref(), json).await?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting Content API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config);
    let addr: SocketAddr = format!("0.0.0.0:{}", state.config.port).parse()?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict to the site origin once it is configurable

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `--data` wins over `CONTENT_DATA_PATH`, which `Config::from_env` reads after loading `.env`.
fn audit_data_path(data: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    data.or_else(|| config.content_data_path.clone())
}

/// One-shot audit of the configured content. Returns whether every category is in balance.
async fn run_audit(data: Option<&Path>, json: bool) -> Result<bool> {
    let source = source_from_path(data);
    let bundle = source.bundle().await?;

    let result = audit_content_balance(&bundle.properties, &bundle.stories);
    let compliance = ContentAuditor::default().compliance(&result);

    if json {
        let out = serde_json::json!({ "audit": result, "compliance": compliance });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Content Distribution ({} items)", result.scores.total());
        for check in &compliance.checks {
            println!(
                "  {:<10} {:>3}% (Target: {}%)  {}",
                check.category.label(),
                check.actual,
                check.target,
                if check.passed { "PASS" } else { "FAIL" }
            );
        }
        println!("Dominant category: {}", result.dominant_category);
        println!("Ratio: {}", result.formatted_ratio);

        if result.recommendations.is_empty() {
            println!("Content balance is within targets.");
        } else {
            println!("Recommendations:");
            for (i, tip) in result.recommendations.iter().enumerate() {
                println!("  {}. {tip}", i + 1);
            }
        }
    }

    if !compliance.passed {
        warn!(
            failing = compliance.failures().count(),
            "content audit failed; adjust content balance"
        );
    }
    Ok(compliance.passed)
}
