use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::post::{self, Entity as PostEntity};

//ROUTERS
pub fn admin_post_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/post", post(create_post))
        .route("/post/:id", patch(patch_post).delete(delete_post))
        .layer(Extension(db))
}

//ROUTES
async fn create_post(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreatePost>,
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

    let new_post = post::ActiveModel {
        slug: Set(payload.slug),
        title: Set(payload.title),
        excerpt: Set(payload.excerpt),
        body: Set(payload.body),
        cover_image: Set(payload.cover_image),
        category: Set(payload.category),
        published_at: Set(payload.published_at),
        read_minutes: Set(payload.read_minutes.unwrap_or(1)),
        is_featured: Set(payload.is_featured.unwrap_or_default()),
        ..Default::default()
    };

    match post::Entity::insert(new_post).exec(&txn).await {
        Ok(_) => match txn.commit().await {
            Ok(_) => (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Post created successfully"
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
                    "error": "Post already exists"
                })),
            )
        }
    }
}

async fn patch_post(
    Path(id): Path<i32>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchPostPayload>,
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

    match PostEntity::find_by_id(id).one(&txn).await {
        Ok(Some(model)) => {
            let mut model: post::ActiveModel = model.into();

            if let Some(slug) = payload.slug {
                model.slug = Set(slug);
            }

            if let Some(title) = payload.title {
                model.title = Set(title);
            }

            if let Some(excerpt) = payload.excerpt {
                model.excerpt = Set(excerpt);
            }

            if let Some(body) = payload.body {
                model.body = Set(body);
            }

            if let Some(cover_image) = payload.cover_image {
                model.cover_image = Set(cover_image);
            }

            if let Some(category) = payload.category {
                model.category = Set(category);
            }

            if let Some(published_at) = payload.published_at {
                model.published_at = Set(published_at);
            }

            if let Some(read_minutes) = payload.read_minutes {
                model.read_minutes = Set(read_minutes);
            }

            if let Some(is_featured) = payload.is_featured {
                model.is_featured = Set(is_featured);
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
                "error": format!("No post with {} id was found.", id)
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

async fn delete_post(
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

    match PostEntity::find_by_id(id).one(&txn).await {
        Ok(Some(model)) => {
            let model: post::ActiveModel = model.into();
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
                "error": format!("No post with {} id was found.", id)
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
struct CreatePost {
    slug: String,
    title: String,
    excerpt: String,
    body: String,
    cover_image: String,
    category: String,
    published_at: String,
    read_minutes: Option<i32>,
    is_featured: Option<bool>,
}

#[derive(Deserialize)]
struct PatchPostPayload {
    slug: Option<String>,
    title: Option<String>,
    excerpt: Option<String>,
    body: Option<String>,
    cover_image: Option<String>,
    category: Option<String>,
    published_at: Option<String>,
    read_minutes: Option<i32>,
    is_featured: Option<bool>,
}
