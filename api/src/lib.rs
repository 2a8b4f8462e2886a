pub mod album;
pub mod auth;
pub mod config;
pub mod graphql;
pub mod photo;
pub mod settle;
pub mod sort;
pub mod storage;
pub mod subscription;

// http paths served by the albums server next to the wasm app
//
// the collaborators (graphql, realtime, storage) are reached directly from the
// browser using the urls found in the client config
pub const APP_CONFIG_PATH: &str = "/app/config";
pub const APP_WHOAMI_PATH: &str = "/app/whoami";

// graphql operation adapters
//
// each invocation expands to an async fn named after the operation that posts
// the document along with the [<Name>Vars] struct and decodes [<Name>Data]
#[macro_export]
macro_rules! operation {
    ($name:ident, $document:expr) => {
        paste::paste! {
            pub async fn [<$name:snake>](
                endpoint: &$crate::config::GraphQLEndpoint,
                vars: &[<$name:camel Vars>],
            ) -> anyhow::Result<[<$name:camel Data>]> {
                $crate::graphql::execute(endpoint, stringify!($name), $document, vars).await
            }
        }
    };
}
