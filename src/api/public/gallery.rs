use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use serde_json::json;
use std::sync::Arc;

use crate::entities::gallery::{self, Entity as GalleryEntity};
use crate::entities::photo;

pub fn gallery_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/gallery", get(get_galleries))
        .route("/gallery/:id", get(get_gallery))
        .layer(Extension(db))
}

async fn get_galleries(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
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

    match GalleryEntity::find()
        .filter(gallery::Column::IsPublished.eq(true))
        .all(&txn)
        .await
    {
        Ok(galleries) => (StatusCode::OK, Json(galleries)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        )
            .into_response(),
    }
}

async fn get_gallery(
    Path(id): Path<String>,
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

    match GalleryEntity::find_by_id(&id)
        .filter(gallery::Column::IsPublished.eq(true))
        .one(&txn)
        .await
    {
        Ok(Some(model)) => {
            let photos = photo::Entity::find()
                .filter(photo::Column::GalleryId.eq(&id))
                .order_by_asc(photo::Column::Id)
                .all(&txn)
                .await
                .unwrap_or_else(|_| vec![]);

            (
                StatusCode::OK,
                Json(json!({
                    "gallery": model,
                    "photos": photos
                })),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("No gallery with {} id was found.", id)
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
