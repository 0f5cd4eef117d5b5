//! Keyboard cursor over the card grid.
//!
//! Positions are laid out row-major, `columns` cards per row. The last row
//! may be short; movement clamps at the edges instead of wrapping.

use crate::types::{GameAction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    columns: usize,
    len: usize,
    index: usize,
}

impl Cursor {
    pub fn new(columns: u16, len: usize) -> Self {
        Self {
            columns: (columns as usize).max(1),
            len,
            index: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.index)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to `position` if it is on the board.
    pub fn set(&mut self, position: Position) {
        if position.index() < self.len {
            self.index = position.index();
        }
    }

    /// Resize for a new deal, keeping the cursor on the board.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    /// Apply a movement action. Returns whether the cursor moved.
    ///
    /// Non-movement actions are ignored.
    pub fn apply(&mut self, action: GameAction) -> bool {
        if self.len == 0 {
            return false;
        }
        let col = self.index % self.columns;
        let next = match action {
            GameAction::MoveLeft if col > 0 => self.index - 1,
            GameAction::MoveRight if col + 1 < self.columns => self.index + 1,
            GameAction::MoveUp if self.index >= self.columns => self.index - self.columns,
            GameAction::MoveDown => self.index + self.columns,
            _ => return false,
        };
        if next >= self.len {
            return false;
        }
        self.index = next;
        true
    }
}
