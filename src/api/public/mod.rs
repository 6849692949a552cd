pub mod auth;
pub mod checkout;
pub mod gallery;
pub mod options;
pub mod post;
pub mod print;
pub mod session;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::services::checkout::PaymentClient;

use auth::auth_router;
use checkout::checkout_session_router;
use gallery::gallery_router;
use options::options_router;
use post::post_router;
use print::print_router;
use session::session_router;

pub fn public_api_router(db: Arc<DatabaseConnection>, payments: Arc<PaymentClient>) -> Router {
    let auth_router = auth_router(db.clone());
    let session_router = session_router();
    let print_router = print_router(db.clone());
    let options_router = options_router(db.clone());
    let gallery_router = gallery_router(db.clone());
    let post_router = post_router(db.clone());
    let checkout_session_router = checkout_session_router(payments);

    Router::new()
        .merge(auth_router)
        .merge(session_router)
        .merge(print_router)
        .merge(options_router)
        .merge(gallery_router)
        .merge(post_router)
        .merge(checkout_session_router)
}
