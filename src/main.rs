//! Context logger demo.
//!
//! # Flow
//!
//! ```text
//!   seed file ──▶ base LogContext ──▶ per-request LogContext
//!                                          │
//!                                          ▼ bound for the request's extent
//!   handler ──▶ nested calls ──▶ info!(...) ──▶ one JSON line on stdout
//! ```
//!
//! Records go to stdout; the crate's own diagnostics go to stderr and are
//! filtered with `RUST_LOG`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use futures_util::future::join_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use context_logger::config::{load_config, SeedConfig};
use context_logger::{
    current_context, debug, error, info, run_with_context, warn, FutureExt, LogArg, LogContext,
};

#[derive(Parser)]
#[command(name = "context-logger")]
#[command(about = "Demonstrates context-scoped JSON logging", long_about = None)]
struct Cli {
    /// TOML seed file providing the base context.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log without and with a bound context
    Basic,
    /// Simulate one API request with nested calls
    Request {
        #[arg(long, default_value = "user-123")]
        user_id: String,
    },
    /// Run several requests concurrently, each in its own context
    Concurrent {
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let seed = match &cli.config {
        Some(path) => load_config(path)?,
        None => SeedConfig::default(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| seed.diagnostics.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "Seed configuration loaded");
    }

    let base = seed.base_context();
    tracing::info!(tags = base.tags().len(), "context-logger demo starting");

    match cli.command {
        Commands::Basic => basic(base),
        Commands::Request { user_id } => {
            handle_user_request(base, &user_id).await;
        }
        Commands::Concurrent { workers } => {
            let requests = (0..workers).map(|i| {
                let base = base.clone();
                tokio::spawn(async move {
                    handle_user_request(base, &format!("user-{i}")).await;
                })
            });
            for result in join_all(requests).await {
                result?;
            }
        }
    }

    Ok(())
}

fn basic(base: LogContext) {
    info(&[LogArg::from("Application started")]);
    warn(&[LogArg::from("This is a warning message")]);
    error(&[LogArg::from("Something went wrong")]);

    let ctx = base
        .with_session_id("req-123")
        .with_tags(["api", "user-service"])
        .with_category("http-request")
        .with_metadata([("userId", "456"), ("endpoint", "/api/users")]);

    run_with_context(ctx.clone(), || {
        context_logger::info!("Processing user request");

        let enriched = ctx
            .with_tags(["database"])
            .with_metadata([("operation", "SELECT")]);
        run_with_context(enriched, || {
            context_logger::debug!("Executing database query");
        });

        context_logger::info!("Request completed successfully");
    });
}

async fn handle_user_request(base: LogContext, user_id: &str) {
    let ctx = base
        .with_session_id(format!("req-{}", uuid::Uuid::new_v4()))
        .with_category("api")
        .with_tags(["user-service", "database"])
        .with_metadata([
            ("userId", user_id),
            ("endpoint", "/api/user"),
            ("method", "GET"),
        ]);

    async {
        context_logger::info!(format!("Fetching user data for user {user_id}"));

        if let Err(e) = validate_permissions(user_id).await {
            context_logger::error!("permission check failed", LogArg::error(&e));
            return;
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        debug(&[LogArg::from("rows"), LogArg::from(1u32)]);
        context_logger::info!("User data retrieved successfully");
    }
    .with_log_context(ctx)
    .await;
}

async fn validate_permissions(user_id: &str) -> std::io::Result<()> {
    let ctx = current_context().with_tags(["auth"]);
    async {
        context_logger::debug!("Validating user permissions");
        tokio::time::sleep(Duration::from_millis(20)).await;
        if user_id.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "empty user id",
            ));
        }
        context_logger::debug!("Permissions validated");
        Ok(())
    }
    .with_log_context(ctx)
    .await
}
