use dioxus::prelude::*;
use tracing::debug;

use crate::common::{
    session::Session,
    stream::{full_link, thumbnail_link},
    style,
};
use api::photo::Photo;

#[derive(Clone, PartialEq, Props)]
pub struct PhotoGridProps {
    photos: Vec<Photo>,
}

#[component]
pub fn PhotoGrid(props: PhotoGridProps) -> Element {
    let selected_signal = use_signal(|| None::<Photo>);

    rsx! {
        style { "{style::PHOTO_GRID}" }
        div { class: "photo-grid",
            for photo in props.photos.iter() {
                PhotoTile {
                    key: "{photo.thumbnail.key}",
                    photo: photo.clone(),
                    selected_signal,
                }
            }
        }
        if let Some(photo) = selected_signal() {
            Lightbox { photo, selected_signal }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct PhotoTileProps {
    photo: Photo,
    selected_signal: Signal<Option<Photo>>,
}

#[component]
fn PhotoTile(props: PhotoTileProps) -> Element {
    let session = use_context::<Session>();
    let mut selected_signal = props.selected_signal;

    let thumbnail = &props.photo.thumbnail;
    let src = thumbnail_link(&session.config.storage, &props.photo);
    let photo = props.photo.clone();

    rsx! {
        div {
            class: "photo-tile",
            onclick: move |_| selected_signal.set(Some(photo.clone())),
            img {
                src,
                width: "{thumbnail.width}",
                height: "{thumbnail.height}",
                loading: "lazy",
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct LightboxProps {
    photo: Photo,
    selected_signal: Signal<Option<Photo>>,
}

// full-size view over the page; any click or Escape closes it
#[component]
fn Lightbox(props: LightboxProps) -> Element {
    let session = use_context::<Session>();
    let mut selected_signal = props.selected_signal;

    let src = full_link(&session.config.storage, &props.photo);

    rsx! {
        div {
            class: "lightbox",
            tabindex: "0",
            onmounted: move |element| async move {
                if let Err(err) = element.set_focus(true).await {
                    debug!("failed to focus lightbox: {err:?}");
                }
            },
            onclick: move |_| selected_signal.set(None),
            onkeydown: move |event: KeyboardEvent| {
                if event.key() == Key::Escape {
                    selected_signal.set(None);
                }
            },
            img { src }
        }
    }
}
