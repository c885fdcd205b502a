use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crypto_content::{
    article::{ArticlePages, ImageUrlBuilder},
    config::AppConfig,
    content::{client::memory_store, ContentClient, MockContentSource},
    http::{router, AppState},
};

#[derive(Parser)]
#[command(name = "crypto-content")]
#[command(about = "Cached article content service for a cryptocurrency information site")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, default_value = "3000")]
    port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long)]
    debug: bool,

    /// Serve fallback content only, without contacting the content API
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("crypto_content={filter_level},tower_http=info").into()
        }))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let content = if args.offline {
        warn!("offline mode: serving fallback content only");
        ContentClient::new(Arc::new(MockContentSource::failing()), memory_store(&config.cache))
            .with_cache_config(&config.cache)
    } else {
        let content_config = config.require_content()?;
        ContentClient::from_config(content_config, &config.cache)
            .context("failed to build content client")?
    };

    let images = ImageUrlBuilder::new(&config.images).context("failed to build image resolver")?;
    let pages = ArticlePages::new(Arc::new(content), images, &config.pages);
    let app = router(AppState::new(pages, config.merge_page_errors));

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    info!("content server started on {}", bind_addr);
    info!(
        "cache ttl: {:?}, default category: {}",
        config.cache.ttl, config.cache.default_category
    );
    info!("");
    info!("Usage:");
    info!("   curl http://{}/articles?category=academy", bind_addr);
    info!("   curl http://{}/articles/{{slug}}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!("failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from([
            "crypto-content",
            "--port",
            "9000",
            "--debug",
            "--offline",
        ])
        .unwrap();

        assert_eq!(args.port, 9000);
        assert_eq!(args.host, "127.0.0.1");
        assert!(args.debug);
        assert!(args.offline);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["crypto-content"]).unwrap();

        assert_eq!(args.port, 3000);
        assert!(!args.debug);
        assert!(!args.offline);
    }
}
