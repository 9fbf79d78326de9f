#![forbid(unsafe_code)]

//! Deterministic engine double for tests.
//!
//! [`ScriptedEngine`] implements the full [`SimulationEngine`] contract
//! over a plain byte buffer and records every mutating call, so tests
//! can assert both on grid contents and on exactly which operations the
//! viewer issued. The update rule is deliberately absent: `tick()` only
//! counts, because the rule is the real engine's business.

use crate::session::SimulationEngine;

/// Call counters and arguments recorded by [`ScriptedEngine`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallLog {
    pub toggle_cell: Vec<(u32, u32)>,
    pub add_glider: Vec<(u32, u32)>,
    pub reset_cells: usize,
    pub dead_cells: usize,
    pub tick: usize,
}

/// In-memory engine with scripted cell state and a call log.
#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    pub calls: CallLog,
}

impl ScriptedEngine {
    /// An all-dead grid.
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        let bytes = ((width as usize) * (height as usize)).div_ceil(8);
        Self {
            width,
            height,
            cells: vec![0u8; bytes],
            calls: CallLog::default(),
        }
    }

    /// A grid seeded with the reference engine's default mixed pattern
    /// (alive where `idx % 2 == 0 || idx % 7 == 0`).
    #[must_use]
    pub fn seeded(width: u32, height: u32) -> Self {
        let mut engine = Self::blank(width, height);
        engine.apply_default_pattern();
        engine
    }

    /// Force one cell's state directly, bypassing the call log.
    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) {
        let idx = self.index(row, col);
        let mask = 1u8 << (idx % 8);
        if alive {
            self.cells[idx / 8] |= mask;
        } else {
            self.cells[idx / 8] &= !mask;
        }
    }

    /// Truncate the buffer to simulate a snapshot shorter than the
    /// grid needs.
    pub fn truncate_cells(&mut self, bytes: usize) {
        self.cells.truncate(bytes);
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    fn apply_default_pattern(&mut self) {
        let total = (self.width as usize) * (self.height as usize);
        for idx in 0..total {
            let alive = idx % 2 == 0 || idx % 7 == 0;
            let mask = 1u8 << (idx % 8);
            if alive {
                self.cells[idx / 8] |= mask;
            } else {
                self.cells[idx / 8] &= !mask;
            }
        }
    }
}

impl SimulationEngine for ScriptedEngine {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        self.calls.toggle_cell.push((row, col));
        let idx = self.index(row, col);
        self.cells[idx / 8] ^= 1u8 << (idx % 8);
    }

    fn reset_cells(&mut self) {
        self.calls.reset_cells += 1;
        self.apply_default_pattern();
    }

    fn dead_cells(&mut self) {
        self.calls.dead_cells += 1;
        self.cells.fill(0);
    }

    fn add_glider(&mut self, row: u32, col: u32) {
        self.calls.add_glider.push((row, col));
        // Reference glider: 3x3 stamp centered on the anchor, wrapping
        // at the edges.
        let stamp = [
            (self.height - 1, self.width - 1, false),
            (self.height - 1, 0, false),
            (self.height - 1, 1, true),
            (0, self.width - 1, true),
            (0, 0, false),
            (0, 1, true),
            (1, self.width - 1, false),
            (1, 0, true),
            (1, 1, true),
        ];
        for (d_row, d_col, alive) in stamp {
            let r = (row + d_row) % self.height;
            let c = (col + d_col) % self.width;
            self.set_cell(r, c, alive);
        }
    }

    fn tick(&mut self) {
        self.calls.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridView;

    #[test]
    fn seeded_matches_default_pattern() {
        let engine = ScriptedEngine::seeded(8, 8);
        let view = GridView::new(8, 8);
        for idx in 0..64u32 {
            let (row, col) = (idx / 8, idx % 8);
            let expected = idx % 2 == 0 || idx % 7 == 0;
            assert_eq!(view.is_alive(engine.cells(), row, col), expected);
        }
    }

    #[test]
    fn glider_stamp_has_five_live_cells() {
        let mut engine = ScriptedEngine::blank(8, 8);
        engine.add_glider(3, 3);
        let view = GridView::new(8, 8);
        let live = (0..8)
            .flat_map(|r| (0..8).map(move |c| (r, c)))
            .filter(|&(r, c)| view.is_alive(engine.cells(), r, c))
            .count();
        assert_eq!(live, 5);
    }
}
