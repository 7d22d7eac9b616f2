//! Startup wiring: lookup client construction and database setup.

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::error::Error;
use crate::provider::LookupClient;

/// Build and configure the character-lookup client from `config`.
pub fn build_lookup_client(config: &Config) -> Result<LookupClient, Error> {
    let lookup_client = LookupClient::builder()
        .user_agent(&config.user_agent)
        .people_endpoint(&config.people_endpoint)
        .rubika_endpoint(&config.rubika_endpoint)
        .build()?;

    Ok(lookup_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}
