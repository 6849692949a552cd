use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use serde_json::json;
use std::sync::Arc;

use crate::entities::{frame_option, paper_type, print_size};

//The three option groups a print is configured from, served together so
//the product modal needs a single request.
pub fn options_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/options", get(get_options))
        .layer(Extension(db))
}

async fn get_options(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    let sizes = print_size::Entity::find().all(&txn).await;
    let papers = paper_type::Entity::find().all(&txn).await;
    let frames = frame_option::Entity::find().all(&txn).await;

    match (sizes, papers, frames) {
        (Ok(sizes), Ok(papers), Ok(frames)) => (
            StatusCode::OK,
            Json(json!({
                "sizes": sizes,
                "papers": papers,
                "frames": frames
            })),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        ),
    }
}
