use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();
    match response.extensions().get::<Result<(), ApiError>>() {
        Some(Ok(_)) | None => info!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        ),
        Some(Err(value)) => error!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            value = %value,
            "Failed to process request"
        ),
    }

    response
}

//Error taxonomy carried as a response extension so the logging layer can
//tell a rejected request from a broken one. Validation failures stay local,
//provider failures are retryable by the user, nothing is retried here.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("Failed to create transaction")]
    TransactionCreationFailed,
    #[error("Database error: {0}")]
    DbError(String),
    #[error("Failed to validate: {0}")]
    ValidationFail(String),
    #[error("Payment provider error: {0}")]
    ProviderError(String),
    #[error("Failed to generate token: {0}")]
    TokenGenerationFailed(String),
}

pub fn to_response<T: IntoResponse>(
    response: T,               //The response that we are sending + StatusCode
    ext: Result<(), ApiError>, //The extension, that we want to give logging middleware
) -> Response {
    let mut response = response.into_response();

    response.extensions_mut().insert(ext);

    response
}
