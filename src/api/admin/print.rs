use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::print::{self, Entity as PrintEntity};

//ROUTERS
pub fn admin_print_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/print", post(create_print))
        .route(
            "/print/:id",
            get(admin_get_print)
                .patch(patch_print)
                .delete(delete_print),
        )
        .layer(Extension(db))
}

//ROUTES
async fn admin_get_print(
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

    //Unlike the public route, hidden prints are visible here.
    match PrintEntity::find_by_id(id).one(&txn).await {
        Ok(Some(model)) => (StatusCode::OK, Json(model)).into_response(),
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

async fn create_print(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreatePrint>,
) -> impl IntoResponse {
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

    let new_print = print::ActiveModel {
        title: Set(payload.title),
        description: Set(payload.description),
        base_price: Set(payload.base_price),
        image_url: Set(payload.image_url),
        is_featured: Set(payload.is_featured.unwrap_or_default()),
        is_available: Set(payload.is_available.unwrap_or(true)),
        ..Default::default()
    };

    match print::Entity::insert(new_print).exec(&txn).await {
        Ok(_) => match txn.commit().await {
            Ok(_) => (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Print created successfully"
                })),
            ),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
        },
        Err(_) => {
            let _ = txn.rollback().await;
            (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "Print already exists"
                })),
            )
        }
    }
}

async fn patch_print(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchPrintPayload>,
) -> impl IntoResponse {
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

    let result = PrintEntity::find_by_id(id).one(&txn).await;
    match result {
        Ok(Some(model)) => {
            let mut model: print::ActiveModel = model.into();

            if let Some(title) = payload.title {
                model.title = Set(title);
            }

            if let Some(description) = payload.description {
                model.description = Set(description);
            }

            if let Some(base_price) = payload.base_price {
                model.base_price = Set(base_price);
            }

            if let Some(image_url) = payload.image_url {
                model.image_url = Set(image_url);
            }

            if let Some(is_featured) = payload.is_featured {
                model.is_featured = Set(is_featured);
            }

            if let Some(is_available) = payload.is_available {
                model.is_available = Set(is_available);
            }

            match model.update(&txn).await {
                Ok(_) => {
                    let _ = txn.commit().await;
                    (
                        StatusCode::OK,
                        Json(json!({
                            "message": "Resource patched successfully."
                        })),
                    )
                }
                Err(_) => {
                    //DB Failed / unique constraint
                    let _ = txn.rollback().await;
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": "Failed to patch this resource"
                        })),
                    )
                }
            }
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("No print with {} id was found.", id)
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        ),
    }
}

async fn delete_print(
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
            );
        }
    };

    let result = PrintEntity::find_by_id(id).one(&txn).await;
    match result {
        Ok(Some(model)) => {
            let model: print::ActiveModel = model.into();
            match model.delete(&txn).await {
                Ok(_) => {
                    let _ = txn.commit().await;
                    (
                        StatusCode::OK,
                        Json(json!({
                            "message": "Resource deleted successfully."
                        })),
                    )
                }
                Err(_) => {
                    let _ = txn.rollback().await;
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": "Failed to delete this resource"
                        })),
                    )
                }
            }
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("No print with {} id was found.", id)
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        ),
    }
}

//Structs
#[derive(Deserialize, Clone, Debug)]
struct CreatePrint {
    title: String,
    description: String,
    base_price: f64,
    image_url: String,
    is_featured: Option<bool>,
    is_available: Option<bool>,
}

#[derive(Deserialize)]
struct PatchPrintPayload {
    title: Option<String>,
    description: Option<String>,
    base_price: Option<f64>,
    image_url: Option<String>,
    is_featured: Option<bool>,
    is_available: Option<bool>,
}
