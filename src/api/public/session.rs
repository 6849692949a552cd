use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::json;
use uuid::Uuid;

use crate::entities::user::Role;
use crate::middleware::auth::generate_token;

//Anonymous shopper sessions. The uuid in the token is the cart key; no row
//is written anywhere until something is added to the cart.
pub fn session_router() -> Router {
    Router::new().route("/session", post(create_session))
}

async fn create_session() -> impl IntoResponse {
    let session_id = Uuid::new_v4().to_string();

    match generate_token(session_id, Role::Shopper.to_string()).await {
        Ok(token) => (
            StatusCode::CREATED,
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
    }
}
