//! Frame keys and the shared frame-lookup table.
//!
//! The atlas is an external, read-only service from the player's point of
//! view: it maps a frame key to the frame's metadata (its intrinsic atlas
//! index and pixel size). Parsing sprite sheets into an atlas is out of
//! scope; [`FrameAtlas`] only supports key registration and JSON loading of
//! an already-described frame table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Identifier of a frame within the shared atlas.
///
/// Sequences may mix numeric and string keys, so the two variants share one
/// type and serialize untagged (`3` and `"walk_3"` both round-trip).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameKey {
    /// Frame addressed by its atlas index
    Index(u32),
    /// Frame addressed by name
    Name(String),
}

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{}", index),
            Self::Name(name) => write!(f, "'{}'", name),
        }
    }
}

impl From<u32> for FrameKey {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for FrameKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FrameKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Metadata for a single atlas frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    /// The frame's intrinsic position in the atlas (not a sequence position)
    pub atlas_index: u32,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

impl FrameDescriptor {
    /// Create a new frame descriptor
    #[inline]
    pub fn new(atlas_index: u32, width: u32, height: u32) -> Self {
        Self {
            atlas_index,
            width,
            height,
        }
    }
}

/// Read-only frame lookup used by the player.
///
/// A missing key is not an error: the player treats `None` as "no resolvable
/// frame" and the rendering layer decides what to draw.
pub trait FrameSource {
    /// Resolve a frame key to its descriptor, if present
    fn lookup(&self, key: &FrameKey) -> Option<FrameDescriptor>;
}

/// Key → descriptor table implementing [`FrameSource`].
///
/// [`register`](FrameAtlas::register) files each descriptor under its atlas
/// index and, when given, a name, so sequences can address the same frame
/// either way.
#[derive(Debug, Clone, Default)]
pub struct FrameAtlas {
    frames: HashMap<FrameKey, FrameDescriptor>,
}

#[derive(Deserialize)]
struct AtlasEntry {
    #[serde(default)]
    name: Option<String>,
    index: u32,
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct AtlasDocument {
    frames: Vec<AtlasEntry>,
}

impl FrameAtlas {
    /// Create an empty atlas
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// File a descriptor under its atlas index and an optional name
    pub fn register(&mut self, name: Option<&str>, frame: FrameDescriptor) {
        self.frames.insert(FrameKey::Index(frame.atlas_index), frame);
        if let Some(name) = name {
            self.frames.insert(FrameKey::Name(name.to_string()), frame);
        }
    }

    /// Insert a descriptor under an explicit key
    #[inline]
    pub fn insert(&mut self, key: FrameKey, frame: FrameDescriptor) {
        self.frames.insert(key, frame);
    }

    /// Check whether a key is present
    #[inline]
    pub fn contains(&self, key: &FrameKey) -> bool {
        self.frames.contains_key(key)
    }

    /// Number of registered keys
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check whether the atlas has no keys
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Load an atlas from a JSON frame-table document.
    ///
    /// Expected shape:
    ///
    /// ```json
    /// { "frames": [ { "name": "walk_0", "index": 0, "width": 64, "height": 64 } ] }
    /// ```
    ///
    /// The `name` field is optional; unnamed frames are only addressable by
    /// index.
    pub fn from_json(json: &str) -> Result<Self, AnimationError> {
        let document: AtlasDocument = serde_json::from_str(json)?;
        let mut atlas = Self::new();
        for entry in document.frames {
            atlas.register(
                entry.name.as_deref(),
                FrameDescriptor::new(entry.index, entry.width, entry.height),
            );
        }
        Ok(atlas)
    }
}

impl FrameSource for FrameAtlas {
    fn lookup(&self, key: &FrameKey) -> Option<FrameDescriptor> {
        self.frames.get(key).copied()
    }
}
