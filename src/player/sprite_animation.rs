//! The frame-sequence playback state machine.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};
use uuid::Uuid;

use crate::atlas::{FrameDescriptor, FrameKey, FrameSource};
use crate::clock::TickClock;
use crate::config::AnimationConfig;
use crate::error::AnimationError;
use crate::event::{AnimationEvent, EventType, ParentVisual};
use crate::player::playback_options::PlaybackOptions;
use crate::player::playback_state::PlaybackState;
use crate::time::{FrameInterval, TickTime};

/// Shared handles to the animation's collaborators.
///
/// Held as one unit so `destroy` releases the clock, the frame table, and
/// the parent together.
#[derive(Clone)]
struct PlayerLinks {
    clock: Rc<dyn TickClock>,
    frames: Rc<dyn FrameSource>,
    parent: Rc<RefCell<dyn ParentVisual>>,
}

/// Plays an ordered sequence of atlas frames at a fixed rate.
///
/// Owned by a single visual entity and driven by an external per-tick
/// clock: the driver calls [`update`](Self::update) once per tick and the
/// animation decides whether to advance, wrap, or complete. All collaborator
/// access is synchronous and single-threaded.
pub struct SpriteAnimation {
    name: String,
    id: Uuid,
    frame_sequence: Vec<FrameKey>,
    interval: FrameInterval,
    looped: bool,
    current_index: usize,
    current_frame: Option<FrameDescriptor>,
    last_advance: TickTime,
    next_advance: TickTime,
    state: PlaybackState,
    paused_at: Option<TickTime>,
    loop_count: u64,
    links: Option<PlayerLinks>,
}

impl SpriteAnimation {
    /// Create an animation over `frame_sequence` at `rate` frames per second.
    ///
    /// The first frame is resolved eagerly; a key missing from the table is
    /// not an error and leaves the current frame unresolved. An empty
    /// sequence or a non-positive rate is rejected.
    pub fn new(
        clock: Rc<dyn TickClock>,
        parent: Rc<RefCell<dyn ParentVisual>>,
        frames: Rc<dyn FrameSource>,
        name: impl Into<String>,
        frame_sequence: Vec<FrameKey>,
        rate: f64,
        looped: bool,
    ) -> Result<Self, AnimationError> {
        if frame_sequence.is_empty() {
            return Err(AnimationError::EmptyFrameSequence);
        }
        let interval = FrameInterval::from_rate(rate)?;

        let mut animation = Self {
            name: name.into(),
            id: Uuid::new_v4(),
            frame_sequence,
            interval,
            looped,
            current_index: 0,
            current_frame: None,
            last_advance: TickTime::zero(),
            next_advance: TickTime::zero(),
            state: PlaybackState::Idle,
            paused_at: None,
            loop_count: 0,
            links: Some(PlayerLinks {
                clock,
                frames,
                parent,
            }),
        };
        animation.resolve_current_frame();
        Ok(animation)
    }

    /// Create an animation using the rate and loop defaults from `config`.
    pub fn with_config(
        clock: Rc<dyn TickClock>,
        parent: Rc<RefCell<dyn ParentVisual>>,
        frames: Rc<dyn FrameSource>,
        name: impl Into<String>,
        frame_sequence: Vec<FrameKey>,
        config: &AnimationConfig,
    ) -> Result<Self, AnimationError> {
        Self::new(
            clock,
            parent,
            frames,
            name,
            frame_sequence,
            config.default_frame_rate,
            config.default_looped,
        )
    }

    /// Display name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique instance id
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of frames in the sequence
    #[inline]
    pub fn frame_total(&self) -> usize {
        self.frame_sequence.len()
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if the animation is actively playing
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Check if the animation finished (naturally or via stop)
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Whether reaching the end wraps back to the first frame
    #[inline]
    pub fn looped(&self) -> bool {
        self.looped
    }

    /// Current frame rate in frames per second
    #[inline]
    pub fn frame_rate(&self) -> f64 {
        self.interval.rate()
    }

    /// Time between frame advances
    #[inline]
    pub fn interval(&self) -> FrameInterval {
        self.interval
    }

    /// Completed wraps since playback last began
    #[inline]
    pub fn loop_count(&self) -> u64 {
        self.loop_count
    }

    /// Sequence cursor (position within the frame sequence)
    #[inline]
    pub fn current_position(&self) -> usize {
        self.current_index
    }

    /// The resolved frame for the current cursor, if its key was found
    #[inline]
    pub fn current_frame(&self) -> Option<FrameDescriptor> {
        self.current_frame
    }

    /// The atlas identity of the frame currently showing.
    ///
    /// When a frame is resolved this is the descriptor's own atlas index,
    /// which may differ from the sequence cursor: two sequence positions can
    /// reference the same atlas frame, and callers asking "which frame is
    /// showing" want the atlas identity. Falls back to the cursor when no
    /// frame is resolved.
    #[inline]
    pub fn current_frame_index(&self) -> usize {
        match self.current_frame {
            Some(frame) => frame.atlas_index as usize,
            None => self.current_index,
        }
    }

    /// Check if playback is paused
    #[inline]
    pub fn paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Start playback from the first frame.
    ///
    /// Applies any rate/loop overrides in `options`, resets the cursor and
    /// timing window, pushes the first frame's size to the parent when it
    /// resolves, and emits [`EventType::Started`].
    pub fn play(&mut self, options: PlaybackOptions) -> Result<(), AnimationError> {
        let links = self.links()?;
        if let Some(rate) = options.frame_rate {
            self.interval = FrameInterval::from_rate(rate)?;
        }
        if let Some(looped) = options.looped {
            self.looped = looped;
        }

        let now = self.begin_playback(&links);
        if let Some(frame) = self.current_frame {
            links
                .parent
                .borrow_mut()
                .set_texture_size(frame.width, frame.height);
        }
        debug!(
            "animation '{}' playing: {} frames at {:.2} fps, looped={}",
            self.name,
            self.frame_total(),
            self.interval.rate(),
            self.looped
        );
        self.emit(&links, EventType::Started, now);
        Ok(())
    }

    /// Replay from the first frame without re-evaluating rate/loop overrides
    /// and without emitting [`EventType::Started`].
    pub fn restart(&mut self) -> Result<(), AnimationError> {
        let links = self.links()?;
        self.begin_playback(&links);
        trace!("animation '{}' restarted", self.name);
        Ok(())
    }

    /// Halt playback, leaving the current frame in place.
    ///
    /// No event is emitted. Idempotent.
    pub fn stop(&mut self) -> Result<(), AnimationError> {
        self.links()?;
        self.state = PlaybackState::Finished;
        self.paused_at = None;
        trace!("animation '{}' stopped", self.name);
        Ok(())
    }

    /// Advance playback if the current frame's display window has elapsed.
    ///
    /// Called once per tick by the driver loop. Returns `Ok(true)` when an
    /// advance occurred (including the advance that completes a non-looping
    /// sequence), `Ok(false)` otherwise.
    ///
    /// This is a threshold check against the clock, not a tick count: a
    /// driver that stalls across several frame windows advances exactly one
    /// frame on its next call, and the timing drift accumulates silently.
    /// Frames are never skipped to catch up.
    pub fn update(&mut self) -> Result<bool, AnimationError> {
        let links = self.links()?;
        if !self.state.is_playing() || self.paused_at.is_some() {
            return Ok(false);
        }
        let now = links.clock.now();
        if now < self.next_advance {
            return Ok(false);
        }

        let next_index = self.current_index + 1;
        if next_index == self.frame_sequence.len() {
            if self.looped {
                self.current_index = 0;
                self.resolve_current_frame();
                self.loop_count += 1;
                trace!("animation '{}' wrapped (loop {})", self.name, self.loop_count);
                self.emit(&links, EventType::Looped, now);
            } else {
                // The cursor stays on the last frame so it remains visible.
                // The timing window is not refreshed on completion.
                self.state = PlaybackState::Finished;
                debug!("animation '{}' completed", self.name);
                self.emit(&links, EventType::Completed, now);
                return Ok(true);
            }
        } else {
            self.current_index = next_index;
            self.resolve_current_frame();
        }

        self.last_advance = now;
        self.next_advance = now + self.interval;
        Ok(true)
    }

    /// Seek to a sequence position.
    ///
    /// When the key at `position` resolves, the frame's size is pushed to
    /// the parent and the cursor moves. When the position is out of range or
    /// the key is missing, the current frame is blanked but the cursor is
    /// left unchanged, so an invalid seek never corrupts playback.
    pub fn set_frame(&mut self, position: usize) -> Result<(), AnimationError> {
        let links = self.links()?;
        self.seek(&links, position);
        Ok(())
    }

    /// Step the cursor forward by `quantity` positions, wrapping around.
    pub fn next_frame(&mut self, quantity: usize) -> Result<(), AnimationError> {
        let links = self.links()?;
        let position = (self.current_index + quantity) % self.frame_sequence.len();
        self.seek(&links, position);
        Ok(())
    }

    /// Step the cursor backward by `quantity` positions, wrapping around.
    pub fn previous_frame(&mut self, quantity: usize) -> Result<(), AnimationError> {
        let links = self.links()?;
        let total = self.frame_sequence.len();
        let position = (self.current_index + total - quantity % total) % total;
        self.seek(&links, position);
        Ok(())
    }

    /// Pause or resume playback.
    ///
    /// Resuming shifts the advance window by the paused span so the current
    /// frame keeps the display time it had left when pausing.
    pub fn set_paused(&mut self, paused: bool) -> Result<(), AnimationError> {
        let links = self.links()?;
        match (paused, self.paused_at) {
            (true, None) => {
                self.paused_at = Some(links.clock.now());
                trace!("animation '{}' paused", self.name);
            }
            (false, Some(since)) => {
                if self.state.is_playing() {
                    let paused_for = links.clock.now() - since;
                    self.last_advance = self.last_advance + paused_for;
                    self.next_advance = self.next_advance + paused_for;
                }
                self.paused_at = None;
                trace!("animation '{}' resumed", self.name);
            }
            _ => {}
        }
        Ok(())
    }

    /// Release the clock, frame table, and parent, and end the lifecycle.
    ///
    /// Idempotent. Every subsequent mutating call fails with
    /// [`AnimationError::PlayerDestroyed`]; read accessors keep working and
    /// report the cleared state.
    pub fn destroy(&mut self) {
        if self.state.is_destroyed() {
            return;
        }
        debug!("animation '{}' destroyed", self.name);
        self.links = None;
        self.frame_sequence.clear();
        self.current_frame = None;
        self.paused_at = None;
        self.state = PlaybackState::Destroyed;
    }

    /// Clone out the collaborator handles, failing fast after `destroy`.
    fn links(&self) -> Result<PlayerLinks, AnimationError> {
        self.links
            .clone()
            .ok_or_else(|| AnimationError::PlayerDestroyed {
                name: self.name.clone(),
            })
    }

    /// Reset cursor, frame, flags, and timing window to the start of playback.
    fn begin_playback(&mut self, links: &PlayerLinks) -> TickTime {
        let now = links.clock.now();
        self.state = PlaybackState::Playing;
        self.paused_at = None;
        self.loop_count = 0;
        self.current_index = 0;
        self.resolve_current_frame();
        self.last_advance = now;
        self.next_advance = now + self.interval;
        now
    }

    /// Re-resolve `current_frame` from the table for the current cursor.
    fn resolve_current_frame(&mut self) {
        let Some(links) = self.links.as_ref() else {
            self.current_frame = None;
            return;
        };
        let key = &self.frame_sequence[self.current_index];
        self.current_frame = links.frames.lookup(key);
        if self.current_frame.is_none() {
            warn!("animation '{}': frame key {} not in atlas", self.name, key);
        }
    }

    fn seek(&mut self, links: &PlayerLinks, position: usize) {
        match self
            .frame_sequence
            .get(position)
            .and_then(|key| links.frames.lookup(key))
        {
            Some(frame) => {
                links
                    .parent
                    .borrow_mut()
                    .set_texture_size(frame.width, frame.height);
                self.current_index = position;
                self.current_frame = Some(frame);
            }
            None => {
                warn!(
                    "animation '{}': no atlas frame at sequence position {}",
                    self.name, position
                );
                self.current_frame = None;
            }
        }
    }

    fn emit(&self, links: &PlayerLinks, event_type: EventType, at: TickTime) {
        let event = AnimationEvent::new(
            event_type,
            self.name.as_str(),
            self.id,
            at,
            self.current_index,
            self.loop_count,
        );
        links.parent.borrow_mut().on_animation_event(&event);
    }
}

impl fmt::Debug for SpriteAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpriteAnimation")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("state", &self.state)
            .field("current_index", &self.current_index)
            .field("current_frame", &self.current_frame)
            .field("frame_total", &self.frame_sequence.len())
            .field("looped", &self.looped)
            .field("loop_count", &self.loop_count)
            .finish()
    }
}
