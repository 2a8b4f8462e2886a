#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

mod common;
use common::session::Session;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod album;
use album::AlbumDetail;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/albums/:album_id")]
        AlbumDetail { album_id: String },
}

// the identity and the collaborator endpoints are needed by every view, so
// nothing is routed until both have been fetched
#[component]
pub fn App() -> Element {
    let session = use_resource(|| async move { Session::load().await });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        match &*session.read() {
            Some(Ok(session)) => rsx! {
                SessionRouter { session: session.clone() }
            },
            Some(Err(err)) => {
                error!("failed to start session: {err}");
                rsx! {
                    div { class: "container",
                        div { class: "segment",
                            h3 { "Unable to sign in" }
                            p { "{err}" }
                        }
                    }
                }
            }
            None => rsx! {
                div { class: "container status", "Loading..." }
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SessionRouterProps {
    session: Session,
}

#[component]
fn SessionRouter(props: SessionRouterProps) -> Element {
    use_context_provider(|| props.session.clone());

    rsx! {
        Router::<Route> {}
    }
}
