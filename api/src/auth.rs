use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::APP_WHOAMI_PATH;

// the identity established by the authenticating proxy in front of the app
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub uid: String,
}

pub async fn whoami() -> anyhow::Result<CurrentUser> {
    let resp = Request::get(APP_WHOAMI_PATH).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(format!(
            "identity lookup failed ({}): {}",
            resp.status(),
            resp.text().await?
        )))
    }
}
