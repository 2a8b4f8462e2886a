use std::{net::IpAddr, path::PathBuf};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::{
    config::{AlbumsConfig, AuthConfig, HttpConfig},
    http::{auth::ConnectedPeer, svc::router},
};
use api::{
    APP_CONFIG_PATH, APP_WHOAMI_PATH,
    auth::CurrentUser,
    config::{ClientConfig, GraphQLEndpoint, RealtimeEndpoint, StorageEndpoint},
    settle::SettlePolicy,
};

fn doc_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("albums-http-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>albums</html>").unwrap();
    std::fs::write(dir.join("app.js"), "console.log('albums')").unwrap();
    dir
}

fn client_config() -> ClientConfig {
    ClientConfig {
        graphql: GraphQLEndpoint {
            url: String::from("https://gql.example.com/graphql"),
            api_key: Some(String::from("k")),
        },
        realtime: RealtimeEndpoint {
            url: String::from("wss://gql.example.com/graphql"),
            api_key: Some(String::from("k")),
        },
        storage: StorageEndpoint {
            base_url: String::from("https://bucket.example.com"),
            public_prefix: String::from("public/"),
            upload_prefix: String::from("uploads/"),
        },
        settle: SettlePolicy::default(),
    }
}

fn app(name: &str) -> Router {
    let config = AlbumsConfig {
        http: HttpConfig {
            socket: String::from("127.0.0.1:0"),
            doc_root: doc_root(name),
        },
        auth: AuthConfig::default(),
        client: client_config(),
    };

    router(&config).unwrap()
}

// a request arriving over a connection from the given peer
fn from_peer(ip: &str, uri: &str) -> axum::http::request::Builder {
    let ip: IpAddr = ip.parse().unwrap();
    Request::get(uri).extension(ConnectedPeer { ip })
}

fn from_proxy(uri: &str) -> axum::http::request::Builder {
    from_peer("127.0.0.1", uri)
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

#[tokio::test]
async fn whoami_requires_the_proxy_header() {
    let resp = app("whoami-missing")
        .oneshot(from_proxy(APP_WHOAMI_PATH).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn whoami_reports_the_proxy_user() {
    let resp = app("whoami-ok")
        .oneshot(
            from_proxy(APP_WHOAMI_PATH)
                .header("x-forwarded-user", "alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let user: CurrentUser = serde_json::from_slice(&body_bytes(resp.into_body()).await).unwrap();
    assert_eq!(user.uid, "alice");
}

#[tokio::test]
async fn whoami_rejects_malformed_user_names() {
    let resp = app("whoami-bad")
        .oneshot(
            from_proxy(APP_WHOAMI_PATH)
                .header("x-forwarded-user", "alice smith")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn config_is_served_to_authenticated_users() {
    let resp = app("config")
        .oneshot(
            from_proxy(APP_CONFIG_PATH)
                .header("x-forwarded-user", "alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let config: ClientConfig = serde_json::from_slice(&body_bytes(resp.into_body()).await).unwrap();
    assert_eq!(config, client_config());
}

#[tokio::test]
async fn proxy_header_from_untrusted_peer_is_refused() {
    let resp = app("whoami-untrusted")
        .oneshot(
            from_peer("203.0.113.7", APP_WHOAMI_PATH)
                .header("x-forwarded-user", "alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_without_peer_is_refused() {
    let resp = app("whoami-no-peer")
        .oneshot(
            Request::get(APP_WHOAMI_PATH)
                .header("x-forwarded-user", "alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn static_files_are_served() {
    let resp = app("static")
        .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp.into_body()).await, b"console.log('albums')");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let resp = app("fallback")
        .oneshot(Request::get("/albums/1234").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp.into_body()).await, b"<html>albums</html>");
}
