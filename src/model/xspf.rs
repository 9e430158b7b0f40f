use serde::{Deserialize, Serialize};

/// Descriptive fields shared by an XSPF playlist and its tracks
///
/// An absent element and an empty element both leave the field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XspfMetadata {
    pub title: String,
    pub creator: String,
    pub annotation: String,
    /// URI of a web page about the resource
    pub info: String,
    pub location: String,
    pub identifier: String,
    /// URI of an image to display
    pub image: String,
}

/// A `<meta rel="...">value</meta>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XspfMeta {
    pub rel: String,
    pub value: String,
}

/// A `<track>` inside `<trackList>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XspfTrack {
    /// Position in the track list (0-based)
    pub index: usize,

    /// `location` and `title` are always present on a parsed track
    pub metadata: XspfMetadata,

    pub album: String,

    /// Duration as written, milliseconds per XSPF
    pub duration: String,
}

impl XspfTrack {
    pub fn location(&self) -> &str {
        &self.metadata.location
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }
}

/// XSPF playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XspfPlaylist {
    /// `version` attribute of the root element
    pub version: u32,

    pub metadata: XspfMetadata,

    pub date: String,

    pub license: String,

    /// Every `<meta>` below the root, in document order
    pub meta: Vec<XspfMeta>,

    pub tracks: Vec<XspfTrack>,
}

impl XspfPlaylist {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
