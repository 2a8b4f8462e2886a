use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::Request,
    http::HeaderName,
    middleware,
    routing::get,
};
use tokio::net::TcpListener;
use tower::Service;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, info, warn};

use crate::{
    config::AlbumsConfig,
    http::{
        api::{client_config, whoami},
        auth::{ConnectedPeer, ProxyAuthData, proxy_auth},
    },
};
use api::{APP_CONFIG_PATH, APP_WHOAMI_PATH, config::ClientConfig};

#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    pub client: ClientConfig,
}

// the full router
//
// the two app endpoints require the proxy header; everything else is the wasm
// app itself, with index.html standing in for any path the app routes on the
// client side (e.g. /albums/:album_id)
pub fn router(config: &AlbumsConfig) -> anyhow::Result<Router> {
    let header_key = HeaderName::from_bytes(config.auth.proxy_header.as_bytes())
        .with_context(|| format!("invalid proxy header name {:?}", config.auth.proxy_header))?;

    let auth = ProxyAuthData::new(header_key, config.auth.trusted_proxies.clone())?;

    let state = Arc::new(HttpEndpoint {
        client: config.client.clone(),
    });

    let app = ServeDir::new(&config.http.doc_root)
        .fallback(ServeFile::new(config.http.doc_root.join("index.html")));

    let router = Router::new()
        .route(APP_WHOAMI_PATH, get(whoami))
        .route(APP_CONFIG_PATH, get(client_config))
        .route_layer(middleware::from_fn_with_state(auth, proxy_auth))
        .with_state(state)
        .fallback_service(app)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

pub async fn serve_http(config: Arc<AlbumsConfig>) -> anyhow::Result<()> {
    let router = router(&config)?;

    let listener = TcpListener::bind(&config.http.socket)
        .await
        .with_context(|| format!("failed to bind {}", config.http.socket))?;

    info!("listening on {}", config.http.socket);

    // the main http server loop
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                warn!("failed to accept connection: {err}");
                continue;
            }
        };

        let router = router.clone();
        let service = hyper::service::service_fn(move |mut request: Request<hyper::body::Incoming>| {
            request
                .extensions_mut()
                .insert(ConnectedPeer { ip: peer.ip() });
            router.clone().call(request)
        });

        let io = hyper_util::rt::TokioIo::new(stream);

        tokio::task::spawn(async move {
            match hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                .serve_connection(io, service)
                .await
            {
                Ok(()) => (),
                Err(err) => debug!("connection from {peer} ended with an error: {err}"),
            }
        });
    }
}
