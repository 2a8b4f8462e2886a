use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::http::svc::HttpEndpoint;
use api::{auth::CurrentUser, config::ClientConfig};

// http api endpoints
//
// both endpoints sit behind the proxy_auth layer.  the config is the same for
// every user, but there is no reason to hand it to unauthenticated callers
#[instrument(skip_all)]
pub(super) async fn whoami(Extension(current_user): Extension<CurrentUser>) -> Response {
    Json(current_user).into_response()
}

#[instrument(skip_all)]
pub(super) async fn client_config(State(state): State<Arc<HttpEndpoint>>) -> Json<ClientConfig> {
    Json(state.client.clone())
}
