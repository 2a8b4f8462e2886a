use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{album::AlbumId, operation};

// structs and types

// a stored image variant, as recorded by the upstream thumbnailing pipeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Object {
    pub width: i32,
    pub height: i32,
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub fullsize: S3Object,
    pub thumbnail: S3Object,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoConnection {
    pub next_token: Option<String>,
    pub items: Vec<Photo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlbumWithPhotos {
    pub id: AlbumId,
    pub name: String,
    pub photos: PhotoConnection,
}

// documents

pub const PHOTO_PAGE_LIMIT: i32 = 999;

pub const GET_ALBUM: &str = r#"query GetAlbum($id: ID!, $nextTokenForPhotos: String, $limit: Int) {
  getAlbum(id: $id) {
    id
    name
    photos(sortDirection: DESC, limit: $limit, nextToken: $nextTokenForPhotos) {
      nextToken
      items {
        fullsize {
          width
          height
          key
        }
        thumbnail {
          width
          height
          key
        }
      }
    }
  }
}"#;

// messages

// fetch an album along with one page of its photos, newest first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlbumVars {
    pub id: AlbumId,
    pub next_token_for_photos: Option<String>,
    pub limit: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlbumData {
    pub get_album: Option<AlbumWithPhotos>,
}

operation! {GetAlbum, GET_ALBUM}

// pagination cursor
//
// a fresh cursor has no token but claims more photos are available, which is
// what makes the first fetch (and any fetch after reset) happen at all
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoCursor {
    next_token: Option<String>,
    has_more: bool,
}

impl Default for PhotoCursor {
    fn default() -> Self {
        PhotoCursor {
            next_token: None,
            has_more: true,
        }
    }
}

impl PhotoCursor {
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn advance(&mut self, page: &PhotoConnection) {
        self.next_token = page.next_token.clone();
        self.has_more = page.next_token.is_some();
    }

    pub fn reset(&mut self) {
        *self = PhotoCursor::default();
    }
}

// a page fetch handed out by PhotoPager::start_request
//
// generation ties the response back to the pager state it was issued from
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    generation: u64,
    pub vars: GetAlbumVars,
}

// album detail state
//
// photos accumulate across pages; a photo whose thumbnail key was already seen
// (e.g. the same page fetched twice) is skipped.  at most one page fetch is
// outstanding, and a response is only applied if no restart happened since the
// fetch began
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoPager {
    pub album_id: AlbumId,
    pub name: Option<String>,
    pub photos: Vec<Photo>,
    pub missing: bool,
    cursor: PhotoCursor,
    seen: HashSet<String>,
    generation: u64,
    in_flight: Option<u64>,
}

impl PhotoPager {
    pub fn new(album_id: AlbumId) -> Self {
        PhotoPager {
            album_id,
            name: None,
            photos: Vec::new(),
            missing: false,
            cursor: PhotoCursor::default(),
            seen: HashSet::new(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn cursor(&self) -> &PhotoCursor {
        &self.cursor
    }

    // the variables for the next page, or None if there is nothing left to load
    pub fn next_request(&self) -> Option<GetAlbumVars> {
        if !self.cursor.has_more() {
            return None;
        }

        Some(GetAlbumVars {
            id: self.album_id.clone(),
            next_token_for_photos: self.cursor.next_token().map(str::to_owned),
            limit: PHOTO_PAGE_LIMIT,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    // claim the next page fetch; None while one is outstanding or when there
    // is nothing left to load
    pub fn start_request(&mut self) -> Option<PageRequest> {
        if self.in_flight.is_some() {
            return None;
        }

        let vars = self.next_request()?;
        self.in_flight = Some(self.generation);

        Some(PageRequest {
            generation: self.generation,
            vars,
        })
    }

    pub fn is_current(&self, request: &PageRequest) -> bool {
        self.in_flight == Some(request.generation) && self.album_id == request.vars.id
    }

    // settle the fetch for request, applying data if the fetch succeeded.
    // returns false, leaving the pager untouched, if the request is stale
    pub fn finish_request(&mut self, request: &PageRequest, data: Option<GetAlbumData>) -> bool {
        if !self.is_current(request) {
            return false;
        }

        self.in_flight = None;

        if let Some(data) = data {
            self.apply(data);
        }

        true
    }

    pub fn apply(&mut self, data: GetAlbumData) {
        let album = match data.get_album {
            Some(album) => album,
            None => {
                self.missing = true;
                self.cursor.advance(&PhotoConnection::default());
                return;
            }
        };

        self.missing = false;
        self.name = Some(album.name);
        self.cursor.advance(&album.photos);

        for photo in album.photos.items {
            if self.seen.insert(photo.thumbnail.key.clone()) {
                self.photos.push(photo);
            }
        }
    }

    // forget everything loaded so far and start again from the first page
    pub fn restart(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.photos.clear();
        self.seen.clear();
        self.cursor.reset();
    }
}
