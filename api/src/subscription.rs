use futures::{
    SinkExt, Stream, StreamExt,
    stream::{self, SplitSink, SplitStream},
};
use gloo_net::websocket::{Message, futures::WebSocket};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::RealtimeEndpoint,
    graphql::{API_KEY_HEADER, GraphQLError, GraphQLRequest, GraphQLResponse, errors_to_anyhow},
    storage::new_object_id,
};

// graphql subscriptions over websockets
//
// the wire format is the graphql-transport-ws protocol: the client opens with
// connection_init, waits for connection_ack, then sends one subscribe per
// operation and receives next/error/complete for it.  ping must be answered
// with pong at any point.
pub const GRAPHQL_TRANSPORT_WS: &str = "graphql-transport-ws";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    ConnectionInit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Subscribe {
        id: String,
        payload: GraphQLRequest<Value>,
    },
    Complete {
        id: String,
    },
    Ping {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Pong {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionAck {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Next {
        id: String,
        payload: GraphQLResponse<Value>,
    },
    Error {
        id: String,
        payload: Vec<GraphQLError>,
    },
    Complete {
        id: String,
    },
    Ping {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Pong {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
}

impl ClientMessage {
    pub fn connection_init(endpoint: &RealtimeEndpoint) -> Self {
        let payload = endpoint
            .api_key
            .as_ref()
            .map(|key| serde_json::json!({ API_KEY_HEADER: key }));

        ClientMessage::ConnectionInit { payload }
    }
}

// decode the data of a next message for the subscription we started
pub fn decode_next<D: DeserializeOwned>(payload: GraphQLResponse<Value>) -> anyhow::Result<D> {
    Ok(serde_json::from_value(payload.into_result()?)?)
}

type Writer = SplitSink<WebSocket, Message>;
type Reader = SplitStream<WebSocket>;

async fn send(writer: &mut Writer, message: &ClientMessage) -> anyhow::Result<()> {
    let text = serde_json::to_string(message)?;

    writer
        .send(Message::Text(text))
        .await
        .map_err(|err| anyhow::Error::msg(format!("websocket send failed: {err}")))
}

// None once the socket is closed
async fn recv(reader: &mut Reader) -> anyhow::Result<Option<ServerMessage>> {
    let message = match reader.next().await {
        Some(Ok(message)) => message,
        Some(Err(err)) => return Err(anyhow::Error::msg(format!("websocket receive failed: {err}"))),
        None => return Ok(None),
    };

    let message = match message {
        Message::Text(text) => serde_json::from_str(&text)?,
        Message::Bytes(bytes) => serde_json::from_slice(&bytes)?,
    };

    Ok(Some(message))
}

// open a websocket, run the handshake, and start a single subscription
//
// the returned stream yields one item per next message and ends when the
// server completes the subscription or the socket closes; an error message
// from the server is yielded once and then ends the stream
pub async fn subscribe<D>(
    endpoint: &RealtimeEndpoint,
    operation_name: &str,
    query: &str,
) -> anyhow::Result<impl Stream<Item = anyhow::Result<D>> + use<D>>
where
    D: DeserializeOwned,
{
    let socket = WebSocket::open_with_protocol(&endpoint.url, GRAPHQL_TRANSPORT_WS)
        .map_err(|err| anyhow::Error::msg(format!("failed to open websocket: {err}")))?;

    let (mut writer, mut reader) = socket.split();

    send(&mut writer, &ClientMessage::connection_init(endpoint)).await?;

    loop {
        match recv(&mut reader).await? {
            Some(ServerMessage::ConnectionAck { .. }) => break,
            Some(ServerMessage::Ping { .. }) => {
                send(&mut writer, &ClientMessage::Pong { payload: None }).await?
            }
            Some(other) => {
                return Err(anyhow::Error::msg(format!(
                    "unexpected message before connection_ack: {other:?}"
                )));
            }
            None => return Err(anyhow::Error::msg("websocket closed during handshake")),
        }
    }

    let id = new_object_id();

    send(
        &mut writer,
        &ClientMessage::Subscribe {
            id: id.clone(),
            payload: GraphQLRequest::new(operation_name, query, Value::Object(Default::default())),
        },
    )
    .await?;

    debug!(%id, operation = operation_name, "subscription started");

    Ok(stream::unfold(Some((writer, reader, id)), |state| async move {
        let Some((mut writer, mut reader, id)) = state else {
            return None;
        };

        loop {
            let message = match recv(&mut reader).await {
                Ok(Some(message)) => message,
                Ok(None) => return None,
                Err(err) => return Some((Err(err), None)),
            };

            match message {
                ServerMessage::Next { id: msg_id, payload } if msg_id == id => {
                    return Some((decode_next(payload), Some((writer, reader, id))));
                }
                ServerMessage::Error { id: msg_id, payload } if msg_id == id => {
                    return Some((Err(errors_to_anyhow(&payload)), None));
                }
                ServerMessage::Complete { id: msg_id } if msg_id == id => return None,
                ServerMessage::Ping { .. } => {
                    if let Err(err) = send(&mut writer, &ClientMessage::Pong { payload: None }).await {
                        return Some((Err(err), None));
                    }
                }
                other => warn!("ignoring unexpected subscription message: {other:?}"),
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_init_carries_api_key() {
        let endpoint = RealtimeEndpoint {
            url: String::from("wss://example.com/graphql"),
            api_key: Some(String::from("secret")),
        };

        let json = serde_json::to_value(ClientMessage::connection_init(&endpoint)).unwrap();

        assert_eq!(json["type"], "connection_init");
        assert_eq!(json["payload"]["x-api-key"], "secret");
    }

    #[test]
    fn connection_init_without_key_has_no_payload() {
        let endpoint = RealtimeEndpoint {
            url: String::from("wss://example.com/graphql"),
            api_key: None,
        };

        let json = serde_json::to_value(ClientMessage::connection_init(&endpoint)).unwrap();

        assert_eq!(json, serde_json::json!({"type": "connection_init"}));
    }

    #[test]
    fn subscribe_message_shape() {
        let message = ClientMessage::Subscribe {
            id: String::from("1"),
            payload: GraphQLRequest::new("OnCreateAlbum", "subscription OnCreateAlbum { x }", serde_json::json!({})),
        };

        let json = serde_json::to_value(message).unwrap();

        assert_eq!(json["type"], "subscribe");
        assert_eq!(json["id"], "1");
        assert_eq!(json["payload"]["operationName"], "OnCreateAlbum");
    }

    #[test]
    fn server_messages_decode() {
        let ack: ServerMessage = serde_json::from_str(r#"{"type": "connection_ack"}"#).unwrap();
        assert_eq!(ack, ServerMessage::ConnectionAck { payload: None });

        let ping: ServerMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert_eq!(ping, ServerMessage::Ping { payload: None });

        let error: ServerMessage = serde_json::from_str(
            r#"{"type": "error", "id": "1", "payload": [{"message": "unauthorized"}]}"#,
        )
        .unwrap();
        match error {
            ServerMessage::Error { id, payload } => {
                assert_eq!(id, "1");
                assert_eq!(payload[0].message, "unauthorized");
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn next_payload_decodes_into_operation_data() {
        let next: ServerMessage = serde_json::from_str(
            r#"{"type": "next", "id": "1", "payload": {"data": {"onCreateAlbum": {"id": "a9", "name": "Fresh", "owner": "alice"}}}}"#,
        )
        .unwrap();

        let payload = match next {
            ServerMessage::Next { payload, .. } => payload,
            other => panic!("unexpected message {other:?}"),
        };

        let data: crate::album::OnCreateAlbumData = decode_next(payload).unwrap();
        assert_eq!(data.on_create_album.id, "a9");
    }
}
