use dioxus::prelude::*;

use crate::album::{AlbumList, NewAlbum};
use api::album::Album;

// albums created while this page is open, either by the form below or
// reported by the new album subscription
#[component]
pub fn Home() -> Element {
    let created_signal = use_signal(Vec::<Album>::new);

    rsx! {
        NewAlbum { created_signal }
        AlbumList { created_signal }
    }
}
