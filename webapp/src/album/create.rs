use dioxus::prelude::*;
use tracing::{error, info};

use crate::common::session::Session;
use api::album::*;

#[derive(Clone, PartialEq, Props)]
pub struct NewAlbumProps {
    created_signal: Signal<Vec<Album>>,
}

// failures are only logged; the input keeps its value so the user can retry
#[component]
pub fn NewAlbum(props: NewAlbumProps) -> Element {
    let session = use_context::<Session>();
    let mut created_signal = props.created_signal;
    let mut name_signal = use_signal(String::new);

    rsx! {
        div { class: "segment",
            h3 { "Add a new album" }
            form {
                class: "inline-form",
                onsubmit: move |_| {
                    let session = session.clone();
                    async move {
                        let name = match validate_album_name(&name_signal()) {
                            Some(name) => name,
                            None => return,
                        };

                        let result = create_album(
                                &session.config.graphql,
                                &CreateAlbumVars {
                                    name,
                                    owner: session.user.uid.clone(),
                                },
                            )
                            .await;

                        match result {
                            Ok(data) => {
                                info!("Created album with id {}", data.create_album.id);
                                merge_album(&mut created_signal.write(), data.create_album);
                                name_signal.set(String::new());
                            }
                            Err(err) => error!("NewAlbum mutation failed: {err}"),
                        }
                    }
                },
                input {
                    class: "form-input",
                    name: "album_name",
                    r#type: "text",
                    placeholder: "New Album Name",
                    value: "{name_signal}",
                    oninput: move |event| name_signal.set(event.value()),
                }
                input { class: "btn btn-primary", r#type: "submit", value: "Create" }
            }
        }
    }
}
