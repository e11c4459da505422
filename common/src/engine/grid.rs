use serde::{Deserialize, Serialize};

use crate::defaults::GRID_SIZE;
use super::types::{Direction, GameMode};

/// A cell address. Coordinates may briefly fall outside the grid while a move is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Square board of side `size`, addressed `[0, size)` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl Grid {
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "grid size must be positive, got {}", size);
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    /// Walls policy: anything off the board is rejected.
    pub fn clamp_reject(&self, position: Position) -> Option<Position> {
        self.contains(position).then_some(position)
    }

    /// Pass-through policy: one step past an edge lands on the opposite edge.
    pub fn wrap(&self, position: Position) -> Position {
        Position::new(self.wrap_axis(position.x), self.wrap_axis(position.y))
    }

    fn wrap_axis(&self, value: i32) -> i32 {
        if value < 0 {
            self.size - 1
        } else if value >= self.size {
            0
        } else {
            value
        }
    }

    /// Applies the boundary policy for `mode`; `None` means the move left a walled board.
    pub fn resolve(&self, position: Position, mode: GameMode) -> Option<Position> {
        match mode {
            GameMode::Walls => self.clamp_reject(position),
            GameMode::PassThrough => Some(self.wrap(position)),
        }
    }

    /// Row-major: all of row 0 first, then row 1, and so on.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}
