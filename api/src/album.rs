use std::collections::HashSet;

use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::{
    config::RealtimeEndpoint,
    operation,
    sort::{SortOrder, SortValue, make_comparator},
    subscription,
};

// structs and types

pub type AlbumId = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub owner: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumConnection {
    pub items: Vec<Album>,
}

// documents

pub const LIST_ALBUMS: &str = r#"query ListAlbums {
  listAlbums(limit: 9999) {
    items {
      id
      name
      owner
    }
  }
}"#;

pub const CREATE_ALBUM: &str = r#"mutation CreateAlbum($name: String!, $owner: String!) {
  createAlbum(input: {name: $name, owner: $owner}) {
    id
    name
    owner
  }
}"#;

pub const ON_CREATE_ALBUM: &str = r#"subscription OnCreateAlbum {
  onCreateAlbum {
    id
    name
    owner
  }
}"#;

// messages

// list every album the backend knows about
//
// there is no per-owner filter on the backend, see albums_owned_by()
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListAlbumsVars {}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAlbumsData {
    pub list_albums: Option<AlbumConnection>,
}

operation! {ListAlbums, LIST_ALBUMS}

// create a new album
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAlbumVars {
    pub name: String,
    pub owner: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumData {
    pub create_album: Album,
}

operation! {CreateAlbum, CREATE_ALBUM}

// new album events
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnCreateAlbumData {
    pub on_create_album: Album,
}

pub async fn subscribe_to_new_albums(
    endpoint: &RealtimeEndpoint,
) -> anyhow::Result<impl Stream<Item = anyhow::Result<OnCreateAlbumData>> + use<>> {
    subscription::subscribe(endpoint, "OnCreateAlbum", ON_CREATE_ALBUM).await
}

// list bookkeeping

// returns None if the name is blank, otherwise the trimmed name
pub fn validate_album_name(name: &str) -> Option<String> {
    let name = name.trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

// append an album to a cached list unless one with the same id is already there
//
// returns true if the list changed
pub fn merge_album(albums: &mut Vec<Album>, album: Album) -> bool {
    if albums.iter().any(|a| a.id == album.id) {
        return false;
    }

    albums.push(album);
    true
}

// the albums that belong to owner, without duplicates, ordered by name
pub fn albums_owned_by<'a>(albums: impl IntoIterator<Item = &'a Album>, owner: &str) -> Vec<Album> {
    let mut seen = HashSet::new();

    let mut owned = albums
        .into_iter()
        .filter(|album| album.owner == owner)
        .filter(|album| seen.insert(album.id.clone()))
        .cloned()
        .collect::<Vec<_>>();

    owned.sort_by(make_comparator(
        |album: &Album| Some(SortValue::Text(album.name.clone())),
        SortOrder::Asc,
    ));

    owned
}
