use std::collections::HashSet;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, error, info, warn};

use crate::common::session::Session;
use api::{
    album::AlbumId,
    config::{ClientConfig, GraphQLEndpoint},
    photo::{GetAlbumVars, PHOTO_PAGE_LIMIT, get_album},
    storage::{image_mime, new_object_id, put_object, upload_key},
};

const FILE_INPUT_ID: &str = "add-image-file-input";

// thumbnail keys on the first photo page, or None if the album could not be
// fetched
async fn first_page(graphql: &GraphQLEndpoint, album_id: &AlbumId) -> Option<Vec<String>> {
    let vars = GetAlbumVars {
        id: album_id.clone(),
        next_token_for_photos: None,
        limit: PHOTO_PAGE_LIMIT,
    };

    match get_album(graphql, &vars).await {
        Ok(data) => data.get_album.map(|album| {
            album
                .photos
                .items
                .into_iter()
                .map(|photo| photo.thumbnail.key)
                .collect()
        }),
        Err(err) => {
            warn!("failed to fetch first photo page: {err}");
            None
        }
    }
}

// poll the first page until the new photos show up there or the policy runs out
async fn wait_for_settle(
    config: &ClientConfig,
    album_id: &AlbumId,
    baseline: Option<HashSet<String>>,
    uploaded: usize,
) {
    let policy = config.settle;

    let Some(baseline) = baseline else {
        TimeoutFuture::new(policy.interval_ms).await;
        return;
    };

    for attempt in 1..=policy.attempts {
        TimeoutFuture::new(policy.interval_ms).await;

        if let Some(observed) = first_page(&config.graphql, album_id).await {
            if policy.is_settled(&baseline, uploaded, observed.iter().map(String::as_str)) {
                debug!(attempt, "uploads are visible");
                return;
            }
        }
    }

    warn!(
        "uploads not visible after {} ms, refreshing anyway",
        policy.max_wait_ms()
    );
}

#[derive(Clone, PartialEq, Props)]
pub struct PhotoUploadProps {
    album_id: AlbumId,
    // called with the number of files stored once the batch is done
    on_uploaded: EventHandler<usize>,
}

// files are stored one at a time, in the order the browser lists them
#[component]
pub fn PhotoUpload(props: PhotoUploadProps) -> Element {
    let session = use_context::<Session>();
    let mut uploading_signal = use_signal(|| false);
    let album_id = props.album_id.clone();
    let on_uploaded = props.on_uploaded;

    rsx! {
        div {
            label {
                class: "btn btn-upload",
                r#for: FILE_INPUT_ID,
                if uploading_signal() {
                    "Uploading..."
                } else {
                    "Add Image"
                }
            }
            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                accept: "image/*",
                multiple: true,
                style: "display: none;",
                disabled: uploading_signal(),
                onchange: move |event: FormEvent| {
                    let session = session.clone();
                    let album_id = album_id.clone();
                    async move {
                        let Some(engine) = event.files() else {
                            return;
                        };

                        let names = engine.files();
                        if names.is_empty() {
                            return;
                        }

                        uploading_signal.set(true);

                        let baseline = first_page(&session.config.graphql, &album_id)
                            .await
                            .map(|keys| keys.into_iter().collect::<HashSet<_>>());

                        let mut uploaded = 0;

                        for name in names {
                            let Some(mime) = image_mime(&name) else {
                                debug!("skipping {name}, not an image");
                                continue;
                            };

                            let Some(bytes) = engine.read_file(&name).await else {
                                warn!("could not read {name}");
                                continue;
                            };

                            let key = upload_key(&session.config.storage, &new_object_id());

                            match put_object(
                                    &session.config.storage,
                                    &key,
                                    mime.essence_str(),
                                    &album_id,
                                    bytes,
                                )
                                .await
                            {
                                Ok(key) => {
                                    info!("Uploaded file: {key}");
                                    uploaded += 1;
                                }
                                Err(err) => error!("upload of {name} failed: {err}"),
                            }
                        }

                        if uploaded > 0 {
                            wait_for_settle(&session.config, &album_id, baseline, uploaded).await;
                        }

                        uploading_signal.set(false);
                        on_uploaded.call(uploaded);
                    }
                },
            }
        }
    }
}
