use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::middleware::logging::{to_response, ApiError};
use crate::services::checkout::{CheckoutError, CheckoutItem, PaymentClient};

//The payment-session endpoint the SPA talks to. Accepts configured items
//with prices in euro, converts and appends shipping inside the service,
//and answers with the provider's session id and redirect URL.
pub fn checkout_session_router(payments: Arc<PaymentClient>) -> Router {
    Router::new()
        .route("/checkout/session", post(create_checkout_session))
        .layer(Extension(payments))
}

async fn create_checkout_session(
    Extension(payments): Extension<Arc<PaymentClient>>,
    Json(payload): Json<CreateSessionPayload>,
) -> Response {
    if payload.items.is_empty() {
        return to_response(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid items"
                })),
            ),
            Err(ApiError::ValidationFail("Empty item list".to_owned())),
        );
    }

    match payments
        .create_session(&payload.items, payload.success_url, payload.cancel_url)
        .await
    {
        Ok(session) => to_response(
            (
                StatusCode::OK,
                Json(json!({
                    "sessionId": session.session_id,
                    "url": session.url
                })),
            ),
            Ok(()),
        ),
        Err(CheckoutError::EmptyCart) => to_response(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid items"
                })),
            ),
            Err(ApiError::ValidationFail("Empty item list".to_owned())),
        ),
        Err(err) => to_response(
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Failed to create checkout session"
                })),
            ),
            Err(ApiError::ProviderError(err.to_string())),
        ),
    }
}

#[derive(Debug, Deserialize)]
struct CreateSessionPayload {
    items: Vec<CheckoutItem>,
    #[serde(rename = "successUrl")]
    success_url: Option<String>,
    #[serde(rename = "cancelUrl")]
    cancel_url: Option<String>,
}
