#![forbid(unsafe_code)]

//! The viewer session: an opaque simulation engine plus the state that
//! drives it.
//!
//! [`SimulationEngine`] is the full contract the viewer consumes; the
//! engine's update rule is a black box behind it. All mutators take
//! `&mut self`, so any `cells()` borrow obtained earlier is statically
//! dead by the time a mutation happens — the packed buffer must be
//! re-resolved before every render pass, and the compiler enforces it.
//!
//! [`Session`] composes the engine with playback, modifier tracking,
//! and frame statistics, and owns the click semantics: what a pointer
//! press means depends on which modifiers are held at that moment.

use crate::fps::{FpsMeter, FpsSummary};
use crate::grid::GridView;
use crate::input::{ModifierTracker, Modifiers};
use crate::playback::Playback;

/// Contract of the external simulation engine.
///
/// Dimensions are fixed for the engine's lifetime. `cells()` exposes
/// the current packed-bit snapshot (one bit per cell, LSB first); its
/// validity window ends at the next mutating call.
pub trait SimulationEngine {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Borrow the packed cell buffer, `ceil(width*height/8)` bytes.
    fn cells(&self) -> &[u8];

    /// Flip one cell between alive and dead.
    fn toggle_cell(&mut self, row: u32, col: u32);

    /// Reseed the grid with the engine's default mixed pattern.
    fn reset_cells(&mut self);

    /// Clear every cell to dead.
    fn dead_cells(&mut self);

    /// Insert a glider seed pattern anchored at the given cell.
    fn add_glider(&mut self, row: u32, col: u32);

    /// Advance one generation.
    fn tick(&mut self);
}

impl<E: SimulationEngine + ?Sized> SimulationEngine for Box<E> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn cells(&self) -> &[u8] {
        (**self).cells()
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        (**self).toggle_cell(row, col);
    }

    fn reset_cells(&mut self) {
        (**self).reset_cells();
    }

    fn dead_cells(&mut self) {
        (**self).dead_cells();
    }

    fn add_glider(&mut self, row: u32, col: u32) {
        (**self).add_glider(row, col);
    }

    fn tick(&mut self) {
        (**self).tick();
    }
}

/// What a click on the grid should do, given the held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Plain click: flip the cell under the pointer.
    ToggleCell,
    /// Alt-click: drop a glider anchored at the pointer.
    InsertGlider,
    /// Shift-click: reserved for a future select/pan gesture; no edit.
    Ignore,
}

impl ClickAction {
    /// Modifier gating for a pointer click. Alt wins over Shift when
    /// both are held; Ctrl does not participate yet.
    #[must_use]
    pub fn for_modifiers(held: Modifiers) -> Self {
        if held.contains(Modifiers::ALT) {
            Self::InsertGlider
        } else if held.contains(Modifiers::SHIFT) {
            Self::Ignore
        } else {
            Self::ToggleCell
        }
    }
}

/// Engine plus the viewer-side state that drives it.
#[derive(Debug)]
pub struct Session<E> {
    engine: E,
    view: GridView,
    playback: Playback,
    fps: FpsMeter,
    modifiers: ModifierTracker,
}

impl<E: SimulationEngine> Session<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        let view = GridView::new(engine.width(), engine.height());
        Self {
            engine,
            view,
            playback: Playback::new(),
            fps: FpsMeter::new(),
            modifiers: ModifierTracker::default(),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.view.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.view.height()
    }

    /// Decode one cell from the engine's live buffer.
    #[must_use]
    pub fn is_alive(&self, row: u32, col: u32) -> bool {
        self.view.is_alive(self.engine.cells(), row, col)
    }

    /// Apply the modifier-gated edit for a click at `(row, col)`.
    ///
    /// Returns the action that was taken, mostly for logging.
    pub fn handle_click(&mut self, row: u32, col: u32) -> ClickAction {
        let action = ClickAction::for_modifiers(self.modifiers.current());
        match action {
            ClickAction::ToggleCell => self.engine.toggle_cell(row, col),
            ClickAction::InsertGlider => self.engine.add_glider(row, col),
            ClickAction::Ignore => {}
        }
        action
    }

    /// Reseed the grid with the engine's default pattern.
    pub fn reset(&mut self) {
        self.engine.reset_cells();
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.engine.dead_cells();
    }

    /// Advance the simulation by the configured steps-per-frame.
    pub fn advance(&mut self) {
        for _ in 0..self.playback.steps_per_frame() {
            self.engine.tick();
        }
    }

    /// Record a frame timestamp; returns the refreshed summary once
    /// the window holds at least one sample.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<FpsSummary> {
        self.fps.record(now_ms);
        self.fps.summary()
    }

    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    #[must_use]
    pub fn modifiers(&self) -> &ModifierTracker {
        &self.modifiers
    }

    pub fn modifiers_mut(&mut self) -> &mut ModifierTracker {
        &mut self.modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEngine;
    use pretty_assertions::assert_eq;

    fn session() -> Session<ScriptedEngine> {
        Session::new(ScriptedEngine::blank(8, 8))
    }

    #[test]
    fn click_with_no_modifiers_toggles_once() {
        let mut session = session();
        assert_eq!(session.handle_click(2, 3), ClickAction::ToggleCell);
        assert_eq!(session.engine.calls.toggle_cell, vec![(2, 3)]);
        assert_eq!(session.engine.calls.add_glider, vec![]);
    }

    #[test]
    fn alt_click_inserts_exactly_one_glider() {
        let mut session = session();
        session.modifiers_mut().key_down("Alt");
        assert_eq!(session.handle_click(4, 4), ClickAction::InsertGlider);
        assert_eq!(session.engine.calls.add_glider, vec![(4, 4)]);
        assert_eq!(session.engine.calls.toggle_cell, vec![]);
    }

    #[test]
    fn shift_click_mutates_nothing() {
        let mut session = session();
        session.modifiers_mut().key_down("Shift");
        assert_eq!(session.handle_click(1, 1), ClickAction::Ignore);
        assert_eq!(session.engine.calls.toggle_cell, vec![]);
        assert_eq!(session.engine.calls.add_glider, vec![]);
        assert_eq!(session.engine.calls.tick, 0);
    }

    #[test]
    fn alt_wins_over_shift() {
        let mut session = session();
        session.modifiers_mut().key_down("Alt");
        session.modifiers_mut().key_down("Shift");
        assert_eq!(session.handle_click(0, 0), ClickAction::InsertGlider);
    }

    #[test]
    fn released_modifier_restores_plain_toggle() {
        let mut session = session();
        session.modifiers_mut().key_down("Alt");
        session.modifiers_mut().key_up("Alt");
        assert_eq!(session.handle_click(0, 0), ClickAction::ToggleCell);
    }

    #[test]
    fn toggle_twice_restores_the_cell() {
        let mut session = session();
        let before = session.is_alive(5, 5);
        session.handle_click(5, 5);
        assert_eq!(session.is_alive(5, 5), !before);
        session.handle_click(5, 5);
        assert_eq!(session.is_alive(5, 5), before);
    }

    #[test]
    fn advance_runs_steps_per_frame_ticks() {
        for steps in [1u32, 3, 10] {
            let mut session = session();
            session.playback_mut().set_steps_per_frame(steps);
            session.advance();
            assert_eq!(session.engine.calls.tick, steps as usize, "steps = {steps}");
        }
    }

    #[test]
    fn reset_and_clear_are_single_calls() {
        let mut session = session();
        session.reset();
        session.clear();
        assert_eq!(session.engine.calls.reset_cells, 1);
        assert_eq!(session.engine.calls.dead_cells, 1);
    }

    #[test]
    fn paused_session_with_stale_token_never_advances() {
        let mut session = session();
        let token = session.playback_mut().play().unwrap();
        session.playback_mut().pause();
        // The frame loop checks the token before calling advance().
        if session.playback().accept(token) {
            session.advance();
        }
        assert_eq!(session.engine.calls.tick, 0);
    }

    #[test]
    fn frame_summary_appears_after_two_timestamps() {
        let mut session = session();
        assert!(session.record_frame(0.0).is_none());
        let summary = session.record_frame(16.0).unwrap();
        assert!(summary.latest > 0.0);
    }
}
