use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::{PgBookingStore, create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Make sure the schema, including the overlap constraint, exists
    initialize_database(&db_pool).await?;

    // Start API server
    let store = Arc::new(PgBookingStore::new(db_pool));
    slotbook_api::start_server(config, store).await?;

    Ok(())
}
