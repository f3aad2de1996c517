//! Portal entry-point: reads settings, initialises tracing and serves HTTP.

mod server;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::parse();
    server::create_server(&settings)?.await
}
