mod create;
pub use create::NewAlbum;

mod list;
pub use list::AlbumList;

mod detail;
pub use detail::AlbumDetail;

mod grid;
mod upload;
