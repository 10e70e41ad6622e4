//! Product model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::types::DbId;

/// A row from the `products` table.
///
/// Serializes to the wire shape `{id, name, description, price, stock}`
/// with `null` for absent optional columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

/// DTO for creating a new product. Only `name` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i32>,
}

/// DTO for partially updating a product.
///
/// Fields follow "new value wins unless absent or falsy": an omitted
/// field, an empty string, or a zero keeps the stored value. This means
/// a request setting `price` to `0` is a no-op; the behavior is kept
/// for compatibility with existing clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i32>,
}

impl UpdateProduct {
    /// Drop falsy values so the repository's `COALESCE` treats them as
    /// absent (empty strings for text fields, zero for numeric fields).
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|s| !s.is_empty()),
            description: self.description.filter(|s| !s.is_empty()),
            price: self.price.filter(|p| *p != 0.0),
            stock: self.stock.filter(|s| *s != 0),
        }
    }
}
