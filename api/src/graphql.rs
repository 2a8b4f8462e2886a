use gloo_net::http::Request;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::GraphQLEndpoint;

pub const API_KEY_HEADER: &str = "x-api-key";

// the standard graphql-over-http envelope
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest<V> {
    pub query: String,
    pub variables: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl<V> GraphQLRequest<V> {
    pub fn new(operation_name: &str, query: &str, variables: V) -> Self {
        GraphQLRequest {
            query: query.to_owned(),
            variables,
            operation_name: Some(operation_name.to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse<D> {
    pub data: Option<D>,
    // some servers send "errors": null rather than omitting the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
}

impl<D> GraphQLResponse<D> {
    // a response carrying any errors is treated as failed, even if partial data came back
    pub fn into_result(self) -> anyhow::Result<D> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(errors_to_anyhow(&errors));
        }

        self.data
            .ok_or_else(|| anyhow::Error::msg("graphql response contained no data"))
    }
}

pub fn errors_to_anyhow(errors: &[GraphQLError]) -> anyhow::Error {
    let messages = errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    anyhow::Error::msg(format!("graphql error: {messages}"))
}

pub async fn execute<V, D>(
    endpoint: &GraphQLEndpoint,
    operation_name: &str,
    query: &str,
    vars: &V,
) -> anyhow::Result<D>
where
    V: Serialize,
    D: DeserializeOwned,
{
    let mut request = Request::post(&endpoint.url);

    if let Some(api_key) = &endpoint.api_key {
        request = request.header(API_KEY_HEADER, api_key);
    }

    let resp = request
        .json(&GraphQLRequest::new(operation_name, query, vars))?
        .send()
        .await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(resp.text().await?));
    }

    resp.json::<GraphQLResponse<D>>().await?.into_result()
}
