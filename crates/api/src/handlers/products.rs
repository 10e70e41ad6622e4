//! Handlers for the product catalog endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_db::models::product::{CreateProduct, UpdateProduct};
use stockroom_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /products
///
/// List all products ordered by id.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list(&state.pool).await?;

    Ok(Json(products))
}

/// GET /products/{id}
///
/// Retrieve a single product by ID.
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    Ok(Json(product))
}

/// POST /products
///
/// Create a new product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT/PATCH /products/{id}
///
/// Partially update a product. Omitted or falsy fields keep their
/// stored values.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::update(&state.pool, product_id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    tracing::info!(product_id, "Product updated");

    Ok(Json(product))
}

/// DELETE /products/{id}
///
/// Delete a product, confirming with the product's name.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::delete(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    tracing::info!(product_id, name = %product.name, "Product deleted");

    Ok(Json(MessageResponse {
        message: format!("Product {} deleted successfully", product.name),
    }))
}
