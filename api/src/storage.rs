use gloo_net::http::Request;
use mime_guess::mime;
use uuid::Uuid;

use crate::{album::AlbumId, config::StorageEndpoint};

// object metadata header carrying the owning album, which the upstream pipeline
// uses to associate the new photo record
pub const ALBUM_ID_METADATA_HEADER: &str = "x-amz-meta-albumid";

// key and url helpers

// record keys come back with the public level prefix; display drops it
pub fn display_key<'a>(storage: &StorageEndpoint, key: &'a str) -> &'a str {
    key.strip_prefix(storage.public_prefix.as_str()).unwrap_or(key)
}

pub fn object_url(storage: &StorageEndpoint, key: &str) -> String {
    format!(
        "{}/{}{}",
        storage.base_url.trim_end_matches('/'),
        storage.public_prefix,
        display_key(storage, key)
    )
}

pub fn upload_key(storage: &StorageEndpoint, id: &str) -> String {
    format!("{}{}", storage.upload_prefix, id)
}

pub fn upload_url(storage: &StorageEndpoint, key: &str) -> String {
    format!("{}/{}", storage.base_url.trim_end_matches('/'), key)
}

// the mime type of a local image, judged by its name since the browser file
// engine does not hand back the type.  None for anything that is not image/*
pub fn image_mime(file_name: &str) -> Option<mime::Mime> {
    mime_guess::from_path(file_name)
        .first()
        .filter(|m| m.type_() == mime::IMAGE)
}

// random version 4 identifier for new objects
pub fn new_object_id() -> String {
    Uuid::new_v4().to_string()
}

// put one object into the bucket under key, tagged with the album it belongs to
pub async fn put_object(
    storage: &StorageEndpoint,
    key: &str,
    content_type: &str,
    album_id: &AlbumId,
    bytes: Vec<u8>,
) -> anyhow::Result<String> {
    let url = upload_url(storage, key);

    let resp = Request::put(&url)
        .header("content-type", content_type)
        .header(ALBUM_ID_METADATA_HEADER, album_id)
        .body(bytes)?
        .send()
        .await?;

    if resp.ok() {
        Ok(key.to_owned())
    } else {
        Err(anyhow::Error::msg(format!(
            "failed to store {key} ({}): {}",
            resp.status(),
            resp.text().await?
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> StorageEndpoint {
        StorageEndpoint {
            base_url: String::from("https://bucket.example.com/"),
            public_prefix: String::from("public/"),
            upload_prefix: String::from("uploads/"),
        }
    }

    #[test]
    fn display_key_strips_public_prefix() {
        let storage = storage();

        assert_eq!(display_key(&storage, "public/resized/a.jpg"), "resized/a.jpg");
        assert_eq!(display_key(&storage, "resized/a.jpg"), "resized/a.jpg");
    }

    #[test]
    fn object_url_always_lands_under_public() {
        let storage = storage();

        assert_eq!(
            object_url(&storage, "public/resized/a.jpg"),
            "https://bucket.example.com/public/resized/a.jpg"
        );
        assert_eq!(
            object_url(&storage, "resized/a.jpg"),
            "https://bucket.example.com/public/resized/a.jpg"
        );
    }

    #[test]
    fn uploads_go_under_the_upload_prefix() {
        let storage = storage();
        let key = upload_key(&storage, "abc");

        assert_eq!(key, "uploads/abc");
        assert_eq!(upload_url(&storage, &key), "https://bucket.example.com/uploads/abc");
    }

    #[test]
    fn only_images_pass_the_filter() {
        assert!(image_mime("beach.JPG").is_some());
        assert!(image_mime("scan.png").is_some());
        assert!(image_mime("notes.txt").is_none());
        assert!(image_mime("clip.mp4").is_none());
        assert!(image_mime("no_extension").is_none());
    }

    #[test]
    fn image_mime_reports_the_content_type() {
        assert_eq!(image_mime("beach.jpg").unwrap().essence_str(), "image/jpeg");
        assert_eq!(image_mime("notes.txt"), None);
    }

    #[test]
    fn generated_ids_differ() {
        let a = new_object_id();
        let b = new_object_id();

        assert_eq!(a.len(), 36);
        assert_eq!(Uuid::parse_str(&a).unwrap().get_version_num(), 4);
        assert_ne!(a, b);
    }
}
