use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, patch, post},
    Json, Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;

use crate::entities::gallery::{self, Entity as GalleryEntity};
use crate::entities::photo::{self, Entity as PhotoEntity, MediaKind};

//ROUTERS
pub fn admin_gallery_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/gallery", post(create_gallery))
        .route(
            "/gallery/:id",
            patch(patch_gallery).delete(delete_gallery),
        )
        .route("/gallery/:id/photo", post(add_photo))
        .route("/photo/:id", delete(delete_photo))
        .layer(Extension(db))
}

//ROUTES
async fn create_gallery(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateGallery>,
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

    let new_gallery = gallery::ActiveModel {
        id: Set(payload.id),
        title: Set(payload.title),
        description: Set(payload.description),
        cover_image: Set(payload.cover_image),
        is_published: Set(payload.is_published.unwrap_or(true)),
    };

    match gallery::Entity::insert(new_gallery).exec(&txn).await {
        Ok(_) => match txn.commit().await {
            Ok(_) => (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Gallery created successfully"
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
                    "error": "Gallery already exists"
                })),
            )
        }
    }
}

async fn patch_gallery(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchGalleryPayload>,
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

    match GalleryEntity::find_by_id(&id).one(&txn).await {
        Ok(Some(model)) => {
            let mut model: gallery::ActiveModel = model.into();

            if let Some(title) = payload.title {
                model.title = Set(title);
            }

            if let Some(description) = payload.description {
                model.description = Set(description);
            }

            if let Some(cover_image) = payload.cover_image {
                model.cover_image = Set(cover_image);
            }

            if let Some(is_published) = payload.is_published {
                model.is_published = Set(is_published);
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
                "error": format!("No gallery with {} id was found.", id)
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

async fn delete_gallery(
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
            );
        }
    };

    match GalleryEntity::find_by_id(&id).one(&txn).await {
        Ok(Some(model)) => {
            let model: gallery::ActiveModel = model.into();
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
                "error": format!("No gallery with {} id was found.", id)
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

async fn add_photo(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<AddPhoto>,
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

    let kind = match MediaKind::from_str(payload.kind.as_deref().unwrap_or("image")) {
        Ok(kind) => kind,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Kind should be 'image' or 'video'"
                })),
            );
        }
    };

    match GalleryEntity::find_by_id(&id).one(&txn).await {
        Ok(Some(_)) => {
            let new_photo = photo::ActiveModel {
                gallery_id: Set(id),
                src: Set(payload.src),
                alt: Set(payload.alt),
                width: Set(payload.width),
                height: Set(payload.height),
                caption: Set(payload.caption),
                kind: Set(kind),
                video_src: Set(payload.video_src),
                ..Default::default()
            };

            match PhotoEntity::insert(new_photo).exec(&txn).await {
                Ok(_) => match txn.commit().await {
                    Ok(_) => (
                        StatusCode::CREATED,
                        Json(json!({
                            "message": "Photo added successfully"
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
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": "Internal server error"
                        })),
                    )
                }
            }
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("No gallery with {} id was found.", id)
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

async fn delete_photo(
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

    match PhotoEntity::find_by_id(id).one(&txn).await {
        Ok(Some(model)) => {
            let model: photo::ActiveModel = model.into();
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
                "error": format!("No photo with {} id was found.", id)
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
struct CreateGallery {
    id: String,
    title: String,
    description: String,
    cover_image: String,
    is_published: Option<bool>,
}

#[derive(Deserialize)]
struct PatchGalleryPayload {
    title: Option<String>,
    description: Option<String>,
    cover_image: Option<String>,
    is_published: Option<bool>,
}

#[derive(Deserialize, Clone, Debug)]
struct AddPhoto {
    src: String,
    alt: String,
    width: i32,
    height: i32,
    caption: Option<String>,
    kind: Option<String>,
    video_src: Option<String>,
}
