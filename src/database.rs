use mongodb::{Client, Database, bson::doc};
use secrecy::ExposeSecret;

use crate::{
    config::{DatabaseConfig, StoreBackend},
    error::Result,
    state::AppState,
};

/// Connects to MongoDB and verifies the server answers a ping.
pub async fn connect(config: &DatabaseConfig) -> Result<Database> {
    let client = Client::with_uri_str(config.uri.expose_secret()).await?;
    let database = client.database(&config.name);

    database.run_command(doc! { "ping": 1 }).await?;
    tracing::info!(database = %config.name, "Connected to MongoDB");

    Ok(database)
}

/// Builds the application state for the configured backend.
pub async fn init_state(config: &DatabaseConfig) -> Result<AppState> {
    match config.backend {
        StoreBackend::Mongodb => {
            let database = connect(config).await?;
            Ok(AppState::with_mongo(&database))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok(AppState::in_memory())
        }
    }
}
