pub use error::Error;
mod conf;
mod error;
mod log;
mod lot;
mod rest;
mod server;
mod sheets;
use conf::Conf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    init_logging();

    if let Err(e) = dotenv {
        info!(error = %e, ".env not loaded, using process environment");
    }

    let conf = Conf::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    server::run(conf).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if cfg!(debug_assertions) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    }
}
