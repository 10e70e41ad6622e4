//! Administrative CLI for the stockroom catalog database.
//!
//! Usage:
//!
//! ```text
//! stockroom-admin create-schema      Apply migrations (creates `products`)
//! stockroom-admin seed-sample-data   Insert the sample catalog rows
//! stockroom-admin drop-schema        Drop all tables
//! ```
//!
//! Reads `DATABASE_URL` from the environment (or `.env`).

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: stockroom-admin <create-schema|seed-sample-data|drop-schema>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_admin=info,stockroom_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = std::env::args().nth(1).context(USAGE)?;

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = stockroom_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    match command.as_str() {
        "create-schema" => {
            stockroom_db::schema::create_schema(&pool)
                .await
                .context("Failed to create schema")?;
            tracing::info!("Tables created");
        }
        "seed-sample-data" => {
            stockroom_db::schema::seed_sample_data(&pool)
                .await
                .context("Failed to seed sample data")?;
            tracing::info!("Tables seeded");
        }
        "drop-schema" => {
            stockroom_db::schema::drop_schema(&pool)
                .await
                .context("Failed to drop schema")?;
            tracing::info!("Tables dropped");
        }
        other => {
            anyhow::bail!("Unknown command '{other}'\n{USAGE}");
        }
    }

    Ok(())
}
