use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::shopper::cart::load_cart_lines;
use crate::entities::cart::{self, Entity as CartEntity};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::services::checkout::{CheckoutItem, PaymentClient};

pub fn checkout_router(db: Arc<DatabaseConnection>, payments: Arc<PaymentClient>) -> Router {
    Router::new()
        .route("/checkout", post(checkout))
        .layer(Extension(db))
        .layer(Extension(payments))
}

//Turns the session's cart into a checkout request and hands the browser a
//redirect. An empty cart never reaches the provider; a provider failure
//leaves the cart untouched so the shopper can simply retry.
async fn checkout(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Extension(payments): Extension<Arc<PaymentClient>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CheckoutPayload>,
) -> Response {
    let session_id = claims.sub;
    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
                Err(ApiError::TransactionCreationFailed),
            );
        }
    };

    let lines = match load_cart_lines(&txn, &session_id).await {
        Ok(lines) => lines,
        Err(err) => {
            return to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error."
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            );
        }
    };

    if lines.is_empty() {
        return to_response(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Cart is empty"
                })),
            ),
            Err(ApiError::ValidationFail("Cart is empty".to_owned())),
        );
    }

    let items: Vec<CheckoutItem> = lines
        .iter()
        .map(|line| CheckoutItem {
            name: line.title.clone(),
            description: format!(
                "{} · {} · {}",
                line.size_name, line.paper_name, line.frame_name
            ),
            price: line.unit_price(),
            quantity: line.quantity,
        })
        .collect();

    let session = match payments
        .create_session(&items, payload.success_url, payload.cancel_url)
        .await
    {
        Ok(session) => session,
        Err(err) => {
            //Cart stays as it was; the shopper may retry at will.
            return to_response(
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({
                        "error": "Failed to create checkout session"
                    })),
                ),
                Err(ApiError::ProviderError(err.to_string())),
            );
        }
    };

    //Handoff succeeded, the cart's job is done.
    let cleared = CartEntity::delete_many()
        .filter(cart::Column::SessionId.eq(&session_id))
        .exec(&txn)
        .await;

    match cleared {
        Ok(_) => match txn.commit().await {
            Ok(_) => to_response(
                (
                    StatusCode::OK,
                    Json(json!({
                        "sessionId": session.session_id,
                        "url": session.url
                    })),
                ),
                Ok(()),
            ),
            Err(err) => to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            ),
        },
        Err(err) => {
            let _ = txn.rollback().await;
            to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
struct CheckoutPayload {
    #[serde(rename = "successUrl")]
    success_url: Option<String>,
    #[serde(rename = "cancelUrl")]
    cancel_url: Option<String>,
}
