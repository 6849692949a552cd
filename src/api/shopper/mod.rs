pub mod cart;
pub mod checkout;

use axum::{middleware::from_fn_with_state, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::services::checkout::PaymentClient;
use cart::cart_router;
use checkout::checkout_router;

pub fn shopper_api_router(db: Arc<DatabaseConnection>, payments: Arc<PaymentClient>) -> Router {
    Router::new()
        .merge(cart_router(db.clone()))
        .merge(checkout_router(db.clone(), payments))
        .layer(from_fn_with_state(
            AuthState {
                db,
                role: Role::Shopper,
            },
            auth_middleware,
        ))
}
