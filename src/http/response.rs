use vercel_runtime::{Body, Response, StatusCode};

use crate::{error::AppError, http::cors::CORS_HEADERS, models::payload::ErrorEnvelope};

pub fn error_response(err: &AppError) -> (StatusCode, ErrorEnvelope) {
    let status = match err {
        AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        AppError::Forwarding(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, ErrorEnvelope::new(err.to_string()))
}

pub fn json_response<T: serde::Serialize>(
    status: StatusCode,
    value: &T,
) -> anyhow::Result<Response<Body>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    Ok(builder.body(serde_json::to_string(value)?.into())?)
}

pub fn empty_response(status: StatusCode) -> anyhow::Result<Response<Body>> {
    let mut builder = Response::builder().status(status);
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    Ok(builder.body(Body::Empty)?)
}
