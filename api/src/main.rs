use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args);

    info!(version = env!("CARGO_PKG_VERSION"), "nutrilens starting");

    let root_path = args.server.root_path.clone();
    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let app_state = state(args).await?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(app_state)?
        .route(
            &format!("{}/metrics", root_path),
            get(move || async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("nutrilens stopped");
    Ok(())
}

fn init_tracing(args: &Args) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        args.log.filter.parse::<EnvFilter>().unwrap_or_else(|e| {
            eprintln!(
                "WARN: LOG_FILTER='{}' is not a valid filter ({}), using 'info'",
                args.log.filter, e
            );
            EnvFilter::new("info")
        })
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if args.log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
