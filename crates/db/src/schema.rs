//! Schema administration: create, seed, and drop.
//!
//! Backs the `stockroom-admin` CLI. Creation runs the same embedded
//! migrations the API server applies at startup; dropping also clears
//! the sqlx bookkeeping table so a later create starts from scratch.

use crate::models::product::CreateProduct;
use crate::repositories::ProductRepo;
use crate::DbPool;

/// Create the schema by applying all embedded migrations.
pub async fn create_schema(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    crate::run_migrations(pool).await
}

/// Insert the sample catalog rows.
pub async fn seed_sample_data(pool: &DbPool) -> Result<(), sqlx::Error> {
    let samples = [
        CreateProduct {
            name: "Product 1".into(),
            description: Some("Product 1 desc".into()),
            price: Some(4.75),
            stock: Some(20),
        },
        CreateProduct {
            name: "Product 2".into(),
            description: None,
            price: Some(159.99),
            stock: Some(150),
        },
    ];

    for sample in &samples {
        let product = ProductRepo::create(pool, sample).await?;
        tracing::debug!(id = product.id, name = %product.name, "Seeded product");
    }
    Ok(())
}

/// Drop the schema, including sqlx's migration bookkeeping.
pub async fn drop_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS products")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(pool)
        .await?;
    Ok(())
}
