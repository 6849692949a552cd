pub mod admin;
pub mod public;
pub mod shopper;

use axum::{middleware::from_fn, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::middleware::logging::logging_middleware;
use crate::services::checkout::PaymentClient;

use admin::admin_api_router;
use public::public_api_router;
use shopper::shopper_api_router;

pub fn create_api_router(db: Arc<DatabaseConnection>, payments: Arc<PaymentClient>) -> Router {
    Router::new()
        .nest("/api", public_api_router(db.clone(), payments.clone()))
        .nest("/api", shopper_api_router(db.clone(), payments))
        .nest("/api/admin", admin_api_router(db))
        .layer(from_fn(logging_middleware))
}
