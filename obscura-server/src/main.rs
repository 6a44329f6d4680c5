//! # Obscura Server
//!
//! Backend for the Obscura photography studio site.
//!
//! ## Overview
//!
//! Two request surfaces, both stateless across requests:
//!
//! - **Portfolio API**: read-only queries over the studio catalog (listing,
//!   slug lookup, search, pagination, related items, statistics)
//! - **Inquiry form**: validates booking/contact submissions and forwards
//!   them to the studio inbox over SMTP
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - An immutable, JSON-sourced catalog loaded once at startup
//! - Lettre for outbound SMTP
//! - Environment-driven configuration (dotenv aware)

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use obscura_core::{CatalogStore, MailTransport, SmtpMailer};
use obscura_server::{AppState, ConfigLoad, ConfigLoader, create_app};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "obscura-server")]
#[command(about = "HTTP backend for the Obscura photography studio site")]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();

    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::new().load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Quieter defaults. Override via RUST_LOG.
                    "info,tower_http=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }

    for warning in &warnings {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let catalog = CatalogStore::load(config.catalog.path.as_deref())
        .context("failed to load portfolio catalog")?;

    let validation = catalog.validate();
    if validation.is_valid {
        info!(
            items = catalog.items().len(),
            categories = catalog.categories().len(),
            "portfolio catalog loaded"
        );
    } else {
        // Legacy-compatible: problems are reported, never fatal at load.
        for error in &validation.errors {
            warn!(%error, "catalog validation problem");
        }
        warn!(
            problems = validation.errors.len(),
            "portfolio catalog loaded with validation problems"
        );
    }

    let mailer: Option<Arc<dyn MailTransport>> = match &config.mail {
        Some(settings) => {
            let mailer = SmtpMailer::new(settings).map_err(|err| {
                anyhow::anyhow!("failed to initialize smtp mailer: {err}")
            })?;
            info!(
                host = %settings.host,
                recipient = %settings.recipient,
                "smtp mailer configured"
            );
            let transport: Arc<dyn MailTransport> = Arc::new(mailer);
            Some(transport)
        }
        None => {
            warn!(
                "mail transport not configured - inquiry submissions will be rejected"
            );
            None
        }
    };

    let config = Arc::new(config);
    let state = AppState::new(Arc::new(catalog), mailer, Arc::clone(&config));
    let app = create_app(state);

    info!(
        "Starting Obscura Studio backend (HTTP) on {}:{}",
        config.server.host, config.server.port
    );

    let listener = tokio::net::TcpListener::bind((
        config.server.host.as_str(),
        config.server.port,
    ))
    .await
    .with_context(|| {
        format!(
            "failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?;

    axum::serve(listener, app).await?;

    Ok(())
}
