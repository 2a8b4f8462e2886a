use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{Route, common::session::Session};

#[component]
fn NavBarInner() -> Element {
    let session = use_context::<Session>();
    let current_path: Route = use_route();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                match current_path {
                    Route::Home {} => rsx! {
                        span { style: "font-weight: 600; font-size: 1.25rem;", "Photo Albums" }
                    },
                    Route::AlbumDetail { .. } => rsx! {
                        Link { to: Route::Home {}, "Back to Albums list" }
                    },
                }
                span { class: "greeting", "Hello, {session.user.uid}" }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        div { class: "container",
            Outlet::<Route> {}
        }
    }
}
