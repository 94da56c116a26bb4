//! fixtured - CSRF test fixture server
//!
//! Serves the CSRF page, login, and upload endpoints that request tools
//! are tested against.
//!
//! Usage:
//!   fixtured [OPTIONS] [config.toml]
//!
//! Without a config file the canonical fixture values are used and the
//! server listens on 127.0.0.1:8888.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fixture_api::{create_router, AppState};
use fixture_core::FixtureConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fixtured")]
#[command(author, version, about = "CSRF test fixture server")]
struct Args {
    /// Fixture config file (TOML)
    #[arg(env = "FIXTURE_CONFIG")]
    config: Option<PathBuf>,

    /// Listen host, overrides the config file
    #[arg(long, env = "FIXTURE_HOST")]
    host: Option<String>,

    /// Listen port, overrides the config file
    #[arg(short, long, env = "FIXTURE_PORT")]
    port: Option<u16>,

    /// File uploads are compared against, overrides the config file
    #[arg(short, long, env = "FIXTURE_REFERENCE_FILE")]
    reference_file: Option<PathBuf>,
}

impl Args {
    /// Load the config file (or defaults) and apply command-line overrides
    fn into_config(self) -> anyhow::Result<FixtureConfig> {
        let mut config = match self.config {
            Some(ref path) => {
                tracing::info!(config = %path.display(), "Loading fixture config");
                FixtureConfig::load(path)?
            }
            None => FixtureConfig::default(),
        };

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = self.reference_file {
            config.upload.reference_path = path;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fixtured=info,fixture_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Args::parse().into_config()?;
    let addr = config.server.bind_addr();

    tracing::info!(
        addr = %addr,
        username = %config.credentials.username,
        cookie = %config.cookie.name,
        reference = %config.upload.reference_path.display(),
        "Starting fixtured"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server has shut down");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let args = Args::try_parse_from(["fixtured"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config, FixtureConfig::default());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 7000\nhost = \"0.0.0.0\"").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::try_parse_from([
            "fixtured",
            path.as_str(),
            "--port",
            "7001",
            "--reference-file",
            "/srv/ref.toml",
        ])
        .unwrap();
        let config = args.into_config().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.upload.reference_path, PathBuf::from("/srv/ref.toml"));
        assert_eq!(config.credentials.username, "admin");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let args = Args::try_parse_from(["fixtured", "/no/such/fixture.toml"]).unwrap();
        assert!(args.into_config().is_err());
    }
}
