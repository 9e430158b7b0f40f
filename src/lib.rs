//! Playlist Parser - M3U, PLS and XSPF playlists
//!
//! This library turns playlist text into structured data, either in a
//! format-specific shape or as a reduced view common to all formats.

pub mod error;
pub mod formats;
pub mod model;

pub use error::{PlaylistError, Result};
pub use formats::{
    detect_format, parse_as, parse_file, parse_file_as, parse_m3u, parse_playlist,
    parse_playlist_simple, parse_pls, parse_reader, parse_simple_file, parse_xspf,
};
pub use model::{Playlist, PlaylistFormat, SimplePlaylist};
