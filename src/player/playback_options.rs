/// Overrides applied by [`play`](crate::SpriteAnimation::play).
///
/// Absent fields keep the animation's current settings; `play(Default::default())`
/// replays with whatever rate and loop flag the animation already has.
#[derive(Debug, Clone, Default)]
pub struct PlaybackOptions {
    /// Frame rate override, in frames per second
    pub frame_rate: Option<f64>,
    /// Loop flag override
    pub looped: Option<bool>,
}

impl PlaybackOptions {
    /// Create options with no overrides
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the frame rate
    #[inline]
    pub fn with_frame_rate(mut self, rate: f64) -> Self {
        self.frame_rate = Some(rate);
        self
    }

    /// Override the loop flag
    #[inline]
    pub fn with_looped(mut self, looped: bool) -> Self {
        self.looped = Some(looped);
        self
    }
}
