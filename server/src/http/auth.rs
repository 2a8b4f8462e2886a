use std::{net::IpAddr, sync::Arc};

use axum::{
    extract::{Request, State},
    http::{HeaderName, StatusCode},
    middleware::Next,
    response::Response,
};
use regex::Regex;
use tracing::debug;

use api::auth::CurrentUser;

// identities are shown in the ui and compared against album owners, so anything
// outside of this set is refused rather than passed along
pub const USER_REGEX: &str = r"^[a-zA-Z0-9_.@+-]{1,128}$";

// the address of the connected peer, put into a request extension in this
// type by the accept loop
#[derive(Clone, Copy, Debug)]
pub struct ConnectedPeer {
    pub ip: IpAddr,
}

// authentication via reverse proxy
//
// the proxy in front of the server has already authenticated the user and put
// their name in header_key; CurrentUser is attached to the request as an extension
#[derive(Clone)]
pub struct ProxyAuthData {
    pub header_key: HeaderName,
    pub trusted_proxies: Arc<Vec<IpAddr>>,
    pub user_regex: Arc<Regex>,
}

impl ProxyAuthData {
    pub fn new(header_key: HeaderName, trusted_proxies: Vec<IpAddr>) -> anyhow::Result<Self> {
        Ok(ProxyAuthData {
            header_key,
            trusted_proxies: Arc::new(trusted_proxies),
            user_regex: Arc::new(Regex::new(USER_REGEX)?),
        })
    }
}

pub async fn proxy_auth(
    State(state): State<ProxyAuthData>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let peer = req
        .extensions()
        .get::<ConnectedPeer>()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !state.trusted_proxies.contains(&peer.ip) {
        debug!("refusing {} from untrusted peer {}", state.header_key, peer.ip);
        return Err(StatusCode::UNAUTHORIZED);
    }

    // attempt to unpack the auth header, returning None if we cannot convert to a str
    let header_val = req
        .headers()
        .get(&state.header_key)
        .and_then(|header| header.to_str().ok());

    let header_val = match header_val {
        Some(val) => val,
        None => {
            debug!("request without a usable {} header", state.header_key);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if !state.user_regex.is_match(header_val) {
        debug!("proxy supplied an invalid user name");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user = CurrentUser {
        uid: header_val.to_owned(),
    };

    // if auth succeeds, pass CurrentUser as a request extension to handlers
    req.extensions_mut().insert(user);

    // then, continue on in the tower of middleware
    Ok(next.run(req).await)
}
