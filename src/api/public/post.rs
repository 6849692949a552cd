use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::entities::post::{self, Entity as PostEntity};

pub fn post_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/post", get(get_posts))
        .route("/post/:slug", get(get_post))
        .layer(Extension(db))
}

//The list view carries everything except the body; the full text only
//comes back from the detail route.
async fn get_posts(
    Query(params): Query<GetPostsQuery>,
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

    let mut half_result = PostEntity::find();

    if Some(true) == params.featured {
        half_result = half_result.filter(post::Column::IsFeatured.eq(true));
    }

    let result = half_result
        .order_by_desc(post::Column::PublishedAt)
        .select_only()
        .column_as(post::Column::Id, "id")
        .column_as(post::Column::Slug, "slug")
        .column_as(post::Column::Title, "title")
        .column_as(post::Column::Excerpt, "excerpt")
        .column_as(post::Column::CoverImage, "cover_image")
        .column_as(post::Column::Category, "category")
        .column_as(post::Column::PublishedAt, "published_at")
        .column_as(post::Column::ReadMinutes, "read_minutes")
        .column_as(post::Column::IsFeatured, "is_featured")
        .into_model::<PostSummary>()
        .all(&txn)
        .await;

    match result {
        Ok(posts) => (StatusCode::OK, Json(posts)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error."
            })),
        )
            .into_response(),
    }
}

async fn get_post(
    Path(slug): Path<String>,
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

    match PostEntity::find()
        .filter(post::Column::Slug.eq(&slug))
        .one(&txn)
        .await
    {
        Ok(Some(model)) => (StatusCode::OK, Json(model)).into_response(),
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("No post with slug '{}' was found.", slug)
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
struct GetPostsQuery {
    featured: Option<bool>,
}

#[derive(Serialize, FromQueryResult)]
struct PostSummary {
    id: i32,
    slug: String,
    title: String,
    excerpt: String,
    cover_image: String,
    category: String,
    published_at: String,
    read_minutes: i32,
    is_featured: bool,
}
