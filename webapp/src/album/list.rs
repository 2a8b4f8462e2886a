use std::pin::pin;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use futures::StreamExt;
use tracing::{error, warn};

use crate::{Route, common::session::Session};
use api::album::*;

#[derive(Clone, PartialEq, Props)]
pub struct AlbumListProps {
    created_signal: Signal<Vec<Album>>,
}

// the backing query returns every album, so the list is cut down to the
// current user's albums here
#[component]
pub fn AlbumList(props: AlbumListProps) -> Element {
    let session = use_context::<Session>();
    let mut created_signal = props.created_signal;

    let graphql = session.config.graphql.clone();
    let albums_future = use_resource(move || {
        let graphql = graphql.clone();
        async move { list_albums(&graphql, &ListAlbumsVars {}).await }
    });

    // new album events are folded into created_signal for as long as the
    // list is mounted
    let realtime = session.config.realtime.clone();
    use_future(move || {
        let realtime = realtime.clone();
        async move {
            let stream = match subscribe_to_new_albums(&realtime).await {
                Ok(stream) => stream,
                Err(err) => {
                    warn!("new album subscription unavailable: {err}");
                    return;
                }
            };

            let mut stream = pin!(stream);

            while let Some(event) = stream.next().await {
                match event {
                    Ok(data) => {
                        merge_album(&mut created_signal.write(), data.on_create_album);
                    }
                    Err(err) => warn!("new album subscription error: {err}"),
                }
            }
        }
    });

    let listed = match &*albums_future.read() {
        None => {
            return rsx! {
                div { class: "segment status", "Loading..." }
            };
        }
        Some(Err(err)) => {
            error!("ListAlbums query failed: {err}");
            None
        }
        Some(Ok(data)) => data.list_albums.clone(),
    };

    let Some(listed) = listed else {
        return rsx! {
            div { class: "segment status", "Oops, you don't have any album yet." }
        };
    };

    let mut albums = listed.items;
    for album in created_signal.read().iter() {
        merge_album(&mut albums, album.clone());
    }

    let albums = albums_owned_by(&albums, &session.user.uid);

    rsx! {
        div { class: "segment",
            h3 { "My Albums" }
            ul { class: "divided-list",
                for album in albums {
                    li { key: "{album.id}",
                        Link {
                            to: Route::AlbumDetail {
                                album_id: album.id.clone(),
                            },
                            "{album.name}"
                        }
                    }
                }
            }
        }
    }
}
