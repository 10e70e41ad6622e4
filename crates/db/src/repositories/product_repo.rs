//! Repository for the `products` table.

use sqlx::PgPool;
use stockroom_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, description, price, stock";

/// Provides data access for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product and return the created row.
    pub async fn create(pool: &PgPool, dto: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price, stock) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.stock)
            .fetch_one(pool)
            .await
    }

    /// Partially update a product.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Callers pass
    /// the DTO through [`UpdateProduct::normalized`] first so falsy
    /// values are treated as absent. Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 stock = COALESCE($5, stock) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.stock)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID, returning the deleted row so callers can
    /// report its name. Returns `None` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("DELETE FROM products WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
