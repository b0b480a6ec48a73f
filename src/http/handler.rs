use tracing::info;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    clients::destination::Forwarder,
    error::{AppError, Result},
    http::response::{empty_response, error_response, json_response},
    models::payload::{InboundPayload, UpstreamReply},
    services::relay,
};

/// OPTIONS answers the preflight, POST is relayed, everything else gets 405.
/// Every branch produces exactly one response with the CORS headers set.
pub async fn handle_request<F: Forwarder + ?Sized>(
    req: Request,
    forwarder: &F,
) -> std::result::Result<Response<Body>, Error> {
    info!(method = %req.method(), "request received");

    let outcome = match req.method().as_str() {
        "OPTIONS" => return Ok(empty_response(StatusCode::OK)?),
        "POST" => forward_post(&req, forwarder).await,
        _ => Err(AppError::MethodNotAllowed),
    };

    match outcome {
        Ok((status, reply)) => {
            info!(status = status.as_u16(), "relayed destination reply");
            Ok(json_response(status, &reply.body)?)
        }
        Err(err) => {
            let (status, envelope) = error_response(&err);
            Ok(json_response(status, &envelope)?)
        }
    }
}

async fn forward_post<F: Forwarder + ?Sized>(
    req: &Request,
    forwarder: &F,
) -> Result<(StatusCode, UpstreamReply)> {
    let content_type = req.headers().get("content-type").and_then(|v| v.to_str().ok());
    let raw: &[u8] = req.body();
    // A body that fails to decode fails the whole forward, before anything is sent.
    let payload = InboundPayload::from_request(content_type, raw)?;
    let reply = relay::forward(&payload, forwarder).await?;
    let status = StatusCode::from_u16(reply.status)
        .map_err(|e| AppError::Forwarding(e.to_string()))?;
    Ok((status, reply))
}
