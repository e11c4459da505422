use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::defaults::INITIAL_SNAKE_LENGTH;
use super::grid::{Grid, Position};

/// Ordered body segments, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(segments: impl IntoIterator<Item = Position>) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "snake must have at least one segment");
        Self { body }
    }

    /// Head at the grid centre, body trailing to the left, ready to move right.
    pub fn canonical(grid: &Grid) -> Self {
        let head = grid.center();
        Self::new((0..INITIAL_SNAKE_LENGTH as i32).map(|i| Position::new(head.x - i, head.y)))
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    pub fn pop_tail(&mut self) -> Position {
        assert!(self.body.len() > 1, "popping the tail would leave the snake empty");
        self.body.pop_back().expect("Snake body should never be empty")
    }
}

impl TryFrom<Vec<Position>> for Snake {
    type Error = String;

    fn try_from(segments: Vec<Position>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err("Snake must have at least one segment".to_string());
        }
        Ok(Self::new(segments))
    }
}

impl From<Snake> for Vec<Position> {
    fn from(snake: Snake) -> Self {
        snake.body.into_iter().collect()
    }
}
