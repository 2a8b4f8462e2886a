use api::{config::StorageEndpoint, photo::Photo, storage::object_url};

pub fn full_link(storage: &StorageEndpoint, photo: &Photo) -> String {
    object_url(storage, &photo.fullsize.key)
}

pub fn thumbnail_link(storage: &StorageEndpoint, photo: &Photo) -> String {
    object_url(storage, &photo.thumbnail.key)
}
