//! Serve command - runs the team record store

use std::net::SocketAddr;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::create_router_with_metrics;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::observability::init_metrics;

/// Arguments for the serve command
#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database file (overrides config)
    #[arg(long)]
    pub database: Option<String>,
}

/// Run the record store until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = resolve_config(AppConfig::load(), &args)?;
    init_logging(&config.logging)?;

    let state = crate::create_app_state_with_config(&config).await?;
    let pool = state.pool.clone();
    let metrics = init_metrics(&config.metrics);
    let app = create_router_with_metrics(state, metrics);

    let addr = build_socket_addr(&config)?;
    info!(database = %config.database.path, "Starting team store on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Team store shutdown complete");

    Ok(())
}

/// Fail on a broken configuration instead of silently running on defaults
fn resolve_config(
    loaded: Result<AppConfig, config::ConfigError>,
    args: &ServeArgs,
) -> anyhow::Result<AppConfig> {
    let config = loaded.context("Failed to load configuration")?;
    Ok(apply_overrides(config, args))
}

fn apply_overrides(mut config: AppConfig, args: &ServeArgs) -> AppConfig {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = &args.database {
        config.database.path = path.clone();
    }
    config
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_take_precedence() {
        let args = ServeArgs {
            port: Some(8080),
            database: Some("other.db".to_string()),
        };

        let config = apply_overrides(AppConfig::default(), &args);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "other.db");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = apply_overrides(AppConfig::default(), &ServeArgs::default());

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.path, "TeamManager.db");
    }

    #[test]
    fn test_config_error_is_not_replaced_by_defaults() {
        let loaded = Err(config::ConfigError::Message(
            "invalid type: string \"not-a-port\", expected u16".to_string(),
        ));

        let error = resolve_config(loaded, &ServeArgs::default()).unwrap_err();
        assert!(error.to_string().contains("Failed to load configuration"));
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let args = ServeArgs {
            port: Some(9000),
            database: None,
        };

        let config = resolve_config(Ok(AppConfig::default()), &args).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.path, "TeamManager.db");
    }

    #[test]
    fn test_build_socket_addr() {
        let addr = build_socket_addr(&AppConfig::default()).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_build_socket_addr_invalid_host() {
        let mut config = AppConfig::default();
        config.server.host = "not a host".to_string();

        assert!(build_socket_addr(&config).is_err());
    }
}
