//! Playback notifications and the parent-visual seam.
//!
//! The player never draws and never owns its parent: it pushes texture-size
//! updates and emits events through the injected [`ParentVisual`] capability.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::TickTime;

/// Types of playback notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EventType {
    /// Playback started from the top
    Started,
    /// The sequence wrapped back to its first frame
    Looped,
    /// The sequence ran past its last frame without looping
    Completed,
}

impl EventType {
    /// Get the name of this event type
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Looped => "looped",
            Self::Completed => "completed",
        }
    }

    /// Check whether this event ends playback
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "looped" => Self::Looped,
            "completed" => Self::Completed,
            _ => Self::Started,
        }
    }
}

/// Playback notification delivered to the parent visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationEvent {
    /// Type of event
    pub event_type: EventType,
    /// Display name of the emitting animation
    pub animation: String,
    /// Unique id of the emitting animation instance
    pub animation_id: Uuid,
    /// Clock time at emission
    pub timestamp: TickTime,
    /// Sequence cursor at emission
    pub frame_position: usize,
    /// Completed wraps since playback began
    pub loop_count: u64,
}

impl AnimationEvent {
    /// Create a new event
    pub fn new(
        event_type: EventType,
        animation: impl Into<String>,
        animation_id: Uuid,
        timestamp: TickTime,
        frame_position: usize,
        loop_count: u64,
    ) -> Self {
        Self {
            event_type,
            animation: animation.into(),
            animation_id,
            timestamp,
            frame_position,
            loop_count,
        }
    }
}

/// Capability interface to the visual entity that owns an animation.
///
/// The animation holds a non-owning handle to its parent purely to push
/// texture-size updates and deliver events; it never controls the parent's
/// lifecycle.
pub trait ParentVisual {
    /// Write the parent's texture size, in pixels
    fn set_texture_size(&mut self, width: u32, height: u32);

    /// Receive a playback notification
    fn on_animation_event(&mut self, event: &AnimationEvent);
}

/// Parent impl that records texture-size writes and collects events.
///
/// Used by the test suites; also handy as a probe when wiring a new driver.
#[derive(Debug, Default)]
pub struct RecordingParent {
    texture_size: Option<(u32, u32)>,
    events: Vec<AnimationEvent>,
}

impl RecordingParent {
    /// Create a new recording parent
    pub fn new() -> Self {
        Self::default()
    }

    /// Last texture size written, if any
    pub fn texture_size(&self) -> Option<(u32, u32)> {
        self.texture_size
    }

    /// All collected events
    pub fn events(&self) -> &[AnimationEvent] {
        &self.events
    }

    /// Number of collected events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Collected events of a specific type
    pub fn events_of_type(&self, event_type: EventType) -> Vec<&AnimationEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Clear collected events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ParentVisual for RecordingParent {
    fn set_texture_size(&mut self, width: u32, height: u32) {
        self.texture_size = Some((width, height));
    }

    fn on_animation_event(&mut self, event: &AnimationEvent) {
        self.events.push(event.clone());
    }
}
