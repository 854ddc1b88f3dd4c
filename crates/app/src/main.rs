mod config;
mod logging;

use clap::Parser;
use services::{AppServices, Clock};
use tokio::net::TcpListener;

use crate::config::{Config, prepare_sqlite_file};

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    logging::init(config.log_format.into());

    let cwd = std::env::current_dir()?;
    let db_url = config.database_url(&cwd);

    // sqlx will not create a missing database file on its own.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url, &config.sentences, Clock::default_clock()).await?;

    let sentence_count = services.quiz().sentence_count();
    if sentence_count == 0 {
        tracing::warn!(path = %config.sentences.display(), "sentence dataset is empty");
    }

    let app = api::router(api::ApiContext::new(&services));
    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        db = %db_url,
        sentences = sentence_count,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
