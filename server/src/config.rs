use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::config::ClientConfig;

// albums server configuration
//
// the server itself only hosts the app and relays identity; the client table is
// handed to the browser verbatim, see api/src/config.rs
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AlbumsConfig {
    pub http: HttpConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub client: ClientConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // location of the built wasm app, which must contain index.html
    pub doc_root: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuthConfig {
    // header set by the authenticating reverse proxy
    #[serde(default = "default_proxy_header")]
    pub proxy_header: String,

    // peers allowed to set proxy_header; requests from anywhere else are refused
    #[serde(default = "default_trusted_proxies")]
    pub trusted_proxies: Vec<IpAddr>,
}

fn default_proxy_header() -> String {
    String::from("x-forwarded-user")
}

fn default_trusted_proxies() -> Vec<IpAddr> {
    vec![
        IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(Ipv6Addr::LOCALHOST),
    ]
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            proxy_header: default_proxy_header(),
            trusted_proxies: default_trusted_proxies(),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: AlbumsConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<AlbumsConfig> {
    // the toml error is kept out of the message since it can quote the
    // offending line, and the config holds api keys
    let data: TomlConfigFile = toml::from_str(doc).map_err(|err| {
        anyhow::Error::msg(format!(
            "failed to parse config file near {:?}",
            err.span()
        ))
    })?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<AlbumsConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {filename:?}"))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_config_parses() {
        let config = parse_config(include_str!("../../config.example.toml")).unwrap();

        assert_eq!(config.http.socket, "127.0.0.1:8080");
        assert_eq!(config.auth.proxy_header, "x-forwarded-user");
        assert_eq!(
            config.auth.trusted_proxies,
            vec!["127.0.0.1".parse::<IpAddr>().unwrap()]
        );
        assert_eq!(config.client.storage.upload_prefix, "uploads/");
        assert_eq!(config.client.settle.attempts, 12);
    }

    #[test]
    fn auth_table_is_optional() {
        let config = parse_config(
            r#"
            [config.http]
            socket = "0.0.0.0:80"
            doc_root = "/srv/app"

            [config.client.graphql]
            url = "https://gql.example.com/graphql"

            [config.client.realtime]
            url = "wss://gql.example.com/graphql"

            [config.client.storage]
            base_url = "https://bucket.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.proxy_header, "x-forwarded-user");
        assert_eq!(config.auth.trusted_proxies, default_trusted_proxies());
        assert_eq!(config.client.graphql.api_key, None);
    }

    #[test]
    fn parse_errors_do_not_echo_the_document() {
        let err = parse_config("[config.http]\nsocket = \"secret-key-material").unwrap_err();

        assert!(!err.to_string().contains("secret-key-material"));
    }
}
