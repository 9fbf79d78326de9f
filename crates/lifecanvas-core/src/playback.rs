#![forbid(unsafe_code)]

//! Play/pause state machine with cancellation tokens.
//!
//! The browser's animation-frame callbacks cannot be revoked reliably
//! from inside the callback chain, so the scheduler never trusts a
//! callback just because it fired. Every transition bumps an epoch;
//! a frame request captures a [`FrameToken`] at request time and the
//! callback asks [`Playback::accept`] before doing any work. A late
//! callback from before a `pause()` (or from a superseded `play()`)
//! carries a stale token and becomes a no-op.
//!
//! `steps_per_frame` is the simulation rate knob: how many generations
//! to advance per rendered frame. It is adjustable mid-playback and
//! takes effect on the next frame.

/// Opaque proof of which playback epoch a frame request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayState {
    Playing,
    Paused,
}

/// Animation scheduler state: play/pause plus the per-frame step rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    state: PlayState,
    steps_per_frame: u32,
    epoch: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    /// Starts paused with one generation per frame.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PlayState::Paused,
            steps_per_frame: 1,
            epoch: 0,
        }
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self.state, PlayState::Paused)
    }

    #[must_use]
    pub const fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    /// Set the per-frame step multiplier, clamped to at least 1.
    pub fn set_steps_per_frame(&mut self, steps: u32) {
        self.steps_per_frame = steps.max(1);
    }

    /// Transition to Playing.
    ///
    /// Returns the token the caller must attach to its first frame
    /// request, or `None` if already playing — in which case exactly
    /// one request is outstanding and no new one may be issued.
    pub fn play(&mut self) -> Option<FrameToken> {
        if matches!(self.state, PlayState::Playing) {
            return None;
        }
        self.state = PlayState::Playing;
        self.epoch += 1;
        Some(FrameToken(self.epoch))
    }

    /// Transition to Paused, invalidating any outstanding token.
    pub fn pause(&mut self) {
        if matches!(self.state, PlayState::Paused) {
            return;
        }
        self.state = PlayState::Paused;
        self.epoch += 1;
    }

    /// Token that continues the current playback run.
    ///
    /// Used by a frame callback to re-arm the next request after its
    /// own token was accepted.
    #[must_use]
    pub const fn current_token(&self) -> FrameToken {
        FrameToken(self.epoch)
    }

    /// Whether a frame callback carrying `token` may run.
    #[must_use]
    pub fn accept(&self, token: FrameToken) -> bool {
        matches!(self.state, PlayState::Playing) && token == self.current_token()
    }
}
