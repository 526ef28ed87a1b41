//! Tracking mode: a cursor stepping through the action rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingState {
    pub active: bool,
    /// 0-based row under the cursor.
    pub cursor: usize,
    pub rows:   usize,
}

impl TrackingState {
    /// Enter tracking over `rows` rows, cursor on the first.
    pub fn enter(&mut self, rows: usize) {
        self.active = true;
        self.cursor = 0;
        self.rows = rows;
    }

    pub fn exit(&mut self) {
        self.active = false;
    }

    pub fn toggle(&mut self, rows: usize) {
        if self.active {
            self.exit();
        } else {
            self.enter(rows);
        }
    }

    /// Step forward one row, clamped at the last row.
    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if !self.active || self.rows == 0 {
            return false;
        }
        if self.cursor + 1 < self.rows {
            self.cursor += 1;
            return true;
        }
        false
    }

    /// Highlighted row, if tracking and there are rows.
    pub fn highlighted(&self) -> Option<usize> {
        (self.active && self.cursor < self.rows).then_some(self.cursor)
    }
}
