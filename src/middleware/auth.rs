use crate::entities::user::{self, Entity as UserEntity, Role};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::{str::FromStr, sync::Arc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//Two kinds of bearer live behind the same middleware: anonymous shopper
//sessions (sub = a uuid minted by POST /api/session, never stored) and
//admin logins (sub = the users row id, re-checked against the table on
//every request).
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let db = state.db;
    let role = state.role;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => match header.strip_prefix("Bearer ") {
            Some(token) => token,
            _ => {
                return Err(StatusCode::UNAUTHORIZED);
            }
        },
        _ => return Err(StatusCode::UNAUTHORIZED),
    };

    let claims: Claims = match validate_token(db.clone(), token, role).await {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected bearer token");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Clone, Debug)]
pub struct AuthState {
    pub db: Arc<DatabaseConnection>,
    pub role: Role,
}

pub async fn generate_token(sub: String, role: String) -> Result<String, AuthMiddlewareError> {
    let exp = match Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or(AuthMiddlewareError::GenerationFail)
    {
        Ok(data) => data.timestamp() as usize,
        Err(_) => {
            return Err(AuthMiddlewareError::GenerationFail);
        }
    };

    let claims = Claims { sub, role, exp };

    match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_secret_key().as_bytes()),
    ) {
        Ok(token) => Ok(token),
        Err(_) => Err(AuthMiddlewareError::GenerationFail),
    }
}

pub async fn validate_token(
    db: Arc<DatabaseConnection>,
    token: &str,
    req_role: Role,
) -> Result<Claims, AuthMiddlewareError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = match decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_secret_key().as_bytes()),
        &validation,
    ) {
        Ok(data) => data,
        Err(_) => {
            return Err(AuthMiddlewareError::TokenExpired);
        }
    };

    let claims = token_data.claims;

    if let Ok(role) = Role::from_str(&claims.role) {
        if role != req_role {
            return Err(AuthMiddlewareError::InvalidSessionOrRole);
        }

        //Shopper sessions are not backed by a users row.
        if role == Role::Shopper {
            return Ok(claims);
        }

        let user_id = match claims.sub.parse::<i32>() {
            Ok(id) => id,
            Err(_) => return Err(AuthMiddlewareError::InvalidSessionOrRole),
        };

        return match UserEntity::find_by_id(user_id)
            .filter(user::Column::Role.eq(role))
            .one(&*db)
            .await
        {
            Ok(Some(_)) => Ok(claims),
            Ok(None) => Err(AuthMiddlewareError::InvalidSessionOrRole),
            Err(_) => Err(AuthMiddlewareError::InternalServerError),
        };
    }

    Err(AuthMiddlewareError::ValidationFail)
}

#[derive(Error, Debug)]
pub enum AuthMiddlewareError {
    #[error("Invalid session id or role")]
    InvalidSessionOrRole,
    #[error("Token expired")]
    TokenExpired,
    #[error("Failed to validate token")]
    ValidationFail,
    #[error("Failed to generate token")]
    GenerationFail,
    #[error("Internal server error")]
    InternalServerError,
}

fn get_secret_key() -> String {
    dotenv().ok();
    std::env::var("SECRET").expect("SECRET not found in .env file")
}
