use std::sync::Arc;

use apps_script_proxy::{
    clients::destination::HttpForwarder, config::ProxyConfig, http::handler::handle_request,
    logging::init_logging,
};
use tracing::info;
use vercel_runtime::{run, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = ProxyConfig::from_env()?;
    // Built once per cold start so invocations share the connection pool.
    let forwarder = Arc::new(HttpForwarder::new(&config)?);
    info!(target_url = forwarder.target_url(), timeout = ?config.timeout(), "proxy function ready");

    run(move |req: Request| {
        let forwarder = Arc::clone(&forwarder);
        async move { handle_request(req, forwarder.as_ref()).await }
    })
    .await
}
