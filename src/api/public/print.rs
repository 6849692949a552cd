use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::entities::print::{self, Entity as PrintEntity};

pub fn print_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/print", get(get_prints))
        .route("/print/:id", get(get_print))
        .layer(Extension(db))
}

async fn get_prints(
    Query(params): Query<GetPrintsQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            )
                .into_response();
        }
    };
    let mut half_result = PrintEntity::find().filter(print::Column::IsAvailable.eq(true));

    if Some(true) == params.featured {
        half_result = half_result.filter(print::Column::IsFeatured.eq(true));
    }

    if let Some(min) = params.min {
        half_result = half_result.filter(print::Column::BasePrice.gte(min));
    }

    if let Some(max) = params.max {
        half_result = half_result.filter(print::Column::BasePrice.lte(max));
    }

    let result = half_result.all(&txn).await;
    match result {
        Ok(prints) => {
            let response: Vec<PublicPrintResponse> = prints
                .into_iter()
                .map(PublicPrintResponse::new)
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        )
            .into_response(),
    }
}

async fn get_print(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            )
                .into_response();
        }
    };
    let result = PrintEntity::find_by_id(id)
        .filter(print::Column::IsAvailable.eq(true))
        .one(&txn)
        .await;
    match result {
        Ok(Some(model)) => {
            (StatusCode::OK, Json(PublicPrintResponse::new(model))).into_response()
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("No print with {} id was found.", id)
            })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
struct GetPrintsQuery {
    featured: Option<bool>,
    min: Option<f64>,
    max: Option<f64>,
}

#[derive(Serialize)]
struct PublicPrintResponse {
    id: i32,
    title: String,
    description: String,
    base_price: f64,
    image_url: String,
}

impl PublicPrintResponse {
    fn new(value: print::Model) -> PublicPrintResponse {
        PublicPrintResponse {
            id: value.id,
            title: value.title,
            description: value.description,
            base_price: value.base_price,
            image_url: value.image_url,
        }
    }
}
