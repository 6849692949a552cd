use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::entities::user::{self, Entity as UserEntity};
use crate::middleware::auth::generate_token;

//The admin panel is the only thing behind a password; there is no public
//registration on a portfolio site.
pub fn auth_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/login", post(login))
        .layer(Extension(db))
}

async fn login(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<UserLogin>,
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

    let result = UserEntity::find()
        .filter(user::Column::Username.eq(&*payload.username))
        .one(&txn)
        .await;

    match result {
        Ok(Some(model)) => match model.check_hash(&payload.password) {
            Ok(()) => match generate_token(model.id.to_string(), model.role.to_string()).await {
                Ok(token) => (
                    StatusCode::OK,
                    Json(json!({
                        "token": token
                    })),
                ),
                Err(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
            },
            Err(_) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Invalid username or password"
                })),
            ),
        },
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid username or password"
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "An internal server error occured"
            })),
        ),
    }
}

#[derive(Debug, Deserialize, Clone)]
struct UserLogin {
    username: String,
    password: String,
}
