use std::{io, net::SocketAddr, path::PathBuf, sync::Arc};

use clap::Parser;

use axum_server::Handle;

use surebet::{
    app::AppState,
    auth::token::TokenKeys,
    cli::{Args, Command, generate_secret},
    config::{DEVELOPMENT_SECRET, read_config},
    db, routes,
};

use anyhow::Error;

use tokio::{main, select, signal};

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
};

#[main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    fmt::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Args::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => PathBuf::from("config.toml"),
    };

    // Read config file
    let config = read_config(config_path)?;

    let database_url = config
        .server
        .database_url
        .clone()
        .ok_or_else(|| Error::msg("No `DATABASE_URL` set!"))?;

    // Run any pending commands
    if let Some(command) = cli.command.as_ref() {
        match command {
            Command::GenerateSecret => {
                tracing::info!("generated! set JWT_SECRET or auth.jwt_secret on boot");
                println!("{}", generate_secret());
            }
            Command::InitDb => {
                let db = db::connect(&database_url).await?;

                tracing::info!("creating database schema");
                db::bootstrap(&db).await?;

                db.close().await;
            }
        }

        return Ok(());
    }

    let secret = match config.auth.jwt_secret.as_ref() {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!("no JWT_SECRET set! using the development secret");
            tracing::warn!("generate a permanent secret with `surebet generate-secret`");
            DEVELOPMENT_SECRET.to_owned()
        }
    };

    let keys = Arc::new(TokenKeys::new(secret.as_bytes(), config.auth.token_ttl));

    tracing::info!("establishing connection to database");

    let db = db::connect(&database_url).await?;
    db::bootstrap(&db).await?;

    // Create app state
    let state = AppState {
        db: db.clone(),
        keys,
    };

    let router = routes::router(state);

    let handle = Handle::new();

    // run shutdown task to detect shutdowns
    tokio::spawn(shutdown_signal(handle.clone()));

    let addr: SocketAddr = ([0, 0, 0, 0], config.http.port).into();

    tracing::info!("listening on {} (http)", addr);

    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    tracing::info!("shutting down");

    db.close().await;

    Ok(())
}

async fn shutdown_signal(handle: Handle) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    select! {
        _ = ctrl_c => { handle.shutdown() }
        _ = terminate => { handle.shutdown() }
    }
}
