use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use coursenav::app::AppState;
use coursenav::app::routes::router;
use coursenav::catalog::Catalog;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct AppArgs {
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Catalog YAML file (default: `$COURSENAV_CATALOG`, then the built-in course).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    coursenav::logging::init()?;

    let args = AppArgs::parse();
    tracing::info!(?args, "starting coursenav-app");

    let catalog = Catalog::resolve(args.catalog.as_deref())?;
    let app = router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .map_err(|err| anyhow::anyhow!("bind {}: {err}", args.addr))?;
    tracing::info!(addr = %args.addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
