// Persistence layer - MongoDB-backed result store

use std::time::Duration;

use color_eyre::Result;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

// Re-export models for convenience
pub mod models;
pub use models::*;

mod results;

const DEFAULT_DATABASE: &str = "chat-gpt-app";

// Main database handle
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Build the store from a connection string. Reachability is probed in
    /// the background: a database that is down is logged but never blocks
    /// startup, and operations issued before it comes back fail at the
    /// driver level.
    pub async fn connect(uri: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(options)?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        let probe = db.clone();
        tokio::spawn(async move {
            match probe.run_command(doc! { "ping": 1 }).await {
                Ok(_) => tracing::info!("database connection has been verified"),
                Err(e) => tracing::error!("database connection failed: {e}"),
            }
        });

        Ok(Self { db })
    }
}
