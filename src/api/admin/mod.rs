pub mod gallery;
pub mod post;
pub mod print;

use axum::{middleware::from_fn_with_state, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use gallery::admin_gallery_router;
use post::admin_post_router;
use print::admin_print_router;

use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};

pub fn admin_api_router(db: Arc<DatabaseConnection>) -> Router {
    let admin_print_router = admin_print_router(db.clone());
    let admin_gallery_router = admin_gallery_router(db.clone());
    let admin_post_router = admin_post_router(db.clone());

    Router::new()
        .merge(admin_print_router)
        .merge(admin_gallery_router)
        .merge(admin_post_router)
        .layer(from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}
