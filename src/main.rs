use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use howell_league_backend::config::settings::get_config;
use howell_league_backend::run;
use howell_league_backend::sync::{HttpNflDataProvider, NflDataProvider};
use howell_league_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "howell-league-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // Only try to establish a connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect_lazy(config.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    let provider: Arc<dyn NflDataProvider> = match HttpNflDataProvider::new(&config.provider) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            tracing::error!("Failed to create NFL data provider: {}", e);
            std::process::exit(1);
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(
        listener,
        connection_pool,
        config.admin,
        config.league,
        provider,
    )?
    .await
}
