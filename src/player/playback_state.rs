use serde::{Deserialize, Serialize};

/// Lifecycle state of a sprite animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Constructed but never played
    Idle,
    /// Advancing through the frame sequence
    Playing,
    /// Ran to completion or was stopped
    Finished,
    /// Destroyed; no further transitions
    Destroyed,
}

impl PlaybackState {
    /// Get the name of this playback state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Finished => "finished",
            Self::Destroyed => "destroyed",
        }
    }

    /// Check if the animation is actively playing
    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if the animation finished (naturally or via stop)
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Check if the animation has been destroyed
    #[inline]
    pub fn is_destroyed(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

impl From<&str> for PlaybackState {
    fn from(s: &str) -> Self {
        match s {
            "playing" => Self::Playing,
            "finished" => Self::Finished,
            "destroyed" => Self::Destroyed,
            _ => Self::Idle,
        }
    }
}
