use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::{APP_CONFIG_PATH, settle::SettlePolicy};

// client configuration
//
// the browser reaches the managed collaborators directly, so the albums server
// hands out their locations at runtime instead of baking them into the wasm
// bundle.  anything in here is visible to every user of the app.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub graphql: GraphQLEndpoint,
    pub realtime: RealtimeEndpoint,
    pub storage: StorageEndpoint,
    #[serde(default)]
    pub settle: SettlePolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQLEndpoint {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

// websocket endpoint speaking graphql-transport-ws
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealtimeEndpoint {
    pub url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageEndpoint {
    // bucket url, without a trailing slash
    pub base_url: String,

    // prefix that record keys are stored under and stripped of for display
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,

    // prefix for new uploads, which the upstream pipeline watches
    #[serde(default = "default_upload_prefix")]
    pub upload_prefix: String,
}

fn default_public_prefix() -> String {
    String::from("public/")
}

fn default_upload_prefix() -> String {
    String::from("uploads/")
}

pub async fn fetch_client_config() -> anyhow::Result<ClientConfig> {
    let resp = Request::get(APP_CONFIG_PATH).send().await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{
                "graphql": {"url": "https://gql.example.com/graphql"},
                "realtime": {"url": "wss://gql.example.com/graphql", "api_key": "k"},
                "storage": {"base_url": "https://bucket.example.com"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.graphql.api_key, None);
        assert_eq!(config.realtime.api_key.as_deref(), Some("k"));
        assert_eq!(config.storage.public_prefix, "public/");
        assert_eq!(config.storage.upload_prefix, "uploads/");
        assert_eq!(config.settle, SettlePolicy::default());
    }
}
