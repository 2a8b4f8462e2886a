use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{debug, error};

use crate::{
    Route,
    album::{grid::PhotoGrid, upload::PhotoUpload},
    common::session::Session,
};
use api::{
    config::GraphQLEndpoint,
    photo::{PhotoPager, get_album},
};

// fetch the page the pager asks for, if any, and fold it in
async fn load_next_page(graphql: GraphQLEndpoint, mut pager_signal: Signal<PhotoPager>) {
    let Some(request) = pager_signal.write().start_request() else {
        return;
    };

    let data = match get_album(&graphql, &request.vars).await {
        Ok(data) => Some(data),
        Err(err) => {
            error!("GetAlbum query failed: {err}");
            None
        }
    };

    if !pager_signal.write().finish_request(&request, data) {
        debug!(album_id = %request.vars.id, "dropping stale photo page");
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AlbumDetailProps {
    album_id: String,
}

#[component]
pub fn AlbumDetail(props: AlbumDetailProps) -> Element {
    let session = use_context::<Session>();
    let graphql = session.config.graphql.clone();

    let album_id = use_memo(use_reactive(&props.album_id, |album_id| album_id));

    let mut pager_signal = use_signal(|| PhotoPager::new(props.album_id.clone()));

    // the router keeps this component mounted when only the album changes
    use_effect({
        let graphql = graphql.clone();
        move || {
            pager_signal.set(PhotoPager::new(album_id()));
            spawn(load_next_page(graphql.clone(), pager_signal));
        }
    });

    let (missing, name, photos, has_more, loading) = {
        let pager = pager_signal.read();
        (
            pager.missing,
            pager.name.clone(),
            pager.photos.clone(),
            pager.cursor().has_more(),
            pager.is_loading(),
        )
    };

    if missing {
        return rsx! {
            div { class: "segment status",
                h3 { "Album not found" }
                Link { to: Route::Home {}, "Back to Albums list" }
            }
        };
    }

    let Some(name) = name else {
        return rsx! {
            div { class: "segment status", "Loading album..." }
        };
    };

    let reload = graphql.clone();
    let more = graphql;

    rsx! {
        div { class: "segment",
            h3 { "{name}" }
            PhotoUpload {
                album_id: album_id(),
                on_uploaded: move |_| {
                    pager_signal.write().restart();
                    spawn(load_next_page(reload.clone(), pager_signal));
                },
            }
            PhotoGrid { photos }
            if loading {
                div { class: "status", "Loading..." }
            } else if has_more {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        spawn(load_next_page(more.clone(), pager_signal));
                    },
                    "Load more photos"
                }
            }
        }
    }
}
