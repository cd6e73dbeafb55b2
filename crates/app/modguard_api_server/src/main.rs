//! Modguard moderation API server binary.
//!
//! Hosts the login/protected/moderate endpoints; the toxicity classifier is
//! selected at startup and injected into the router.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use modguard_core::auth::credentials::CredentialStore;
use modguard_core::classifier::provider::build_classifier;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "modguard_api_server", about = "Modguard moderation API server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind_addr: String,

    /// Classifier provider: "detoxify" or "lexicon".
    #[arg(long, env = "CLASSIFIER_PROVIDER", default_value = "lexicon")]
    classifier: String,

    /// Base URL of the Detoxify scoring sidecar.
    #[arg(long, env = "DETOXIFY_URL", default_value = "http://127.0.0.1:9100")]
    detoxify_url: String,

    /// JSON credentials file (username → password). Demo mapping when unset.
    #[arg(long, env = "CREDENTIALS_FILE")]
    credentials_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,modguard_api=debug,modguard_core=debug".parse().unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    info!(
        bind_addr = %args.bind_addr,
        classifier = %args.classifier,
        "starting modguard_api_server"
    );

    // CLI args (which also honor the same env vars) win over plain env.
    let config = modguard_api::config::ApiConfig {
        bind_addr: args.bind_addr,
        classifier_provider: args.classifier,
        detoxify_url: args.detoxify_url,
        credentials_file: args.credentials_file,
        ..modguard_api::config::ApiConfig::from_env()
    };

    let credentials = CredentialStore::resolve(config.credentials_file.as_deref())?;
    info!(users = credentials.len(), "credential store ready");

    let classifier = build_classifier(&config.classifier_provider, &config.detoxify_url)?;
    info!(classifier = classifier.name(), "classifier ready");

    let state = modguard_api::AppState {
        config: config.clone(),
        credentials: Arc::new(credentials),
        classifier,
    };

    let app = modguard_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        addr = %local_addr,
        version = modguard_core::version(),
        "moderation API listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
