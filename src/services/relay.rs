use tracing::warn;

use crate::{
    clients::destination::Forwarder,
    error::Result,
    models::payload::{InboundPayload, UpstreamReply},
};

// Single attempt. The caller turns any error into the 500 envelope.
pub async fn forward<F: Forwarder + ?Sized>(
    payload: &InboundPayload,
    forwarder: &F,
) -> Result<UpstreamReply> {
    forwarder.forward(payload).await.inspect_err(|e| {
        warn!(error = %e, "forwarding failed");
    })
}
