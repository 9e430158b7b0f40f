//! Data model for parsed playlists
//!
//! Each format gets its own playlist/track types. `Playlist` unifies them
//! and `SimplePlaylist` is the lossy view shared by all three.

mod m3u;
mod playlist;
mod pls;
mod simple;
mod xspf;

pub use m3u::{M3uPlaylist, M3uTrack};
pub use playlist::{Playlist, PlaylistFormat};
pub use pls::{PlsPlaylist, PlsTrack, PLS_VERSION};
pub use simple::{SimplePlaylist, SimpleTrack};
pub use xspf::{XspfMeta, XspfMetadata, XspfPlaylist, XspfTrack};
