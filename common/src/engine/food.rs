use crate::random::RandomSource;
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Uniformly picks a free cell. `None` when the snake covers the whole board.
pub fn spawn_food(grid: &Grid, snake: &Snake, rng: &mut impl RandomSource) -> Option<Position> {
    let free: Vec<Position> = grid.cells().filter(|cell| !snake.contains(*cell)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.index_below(free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SessionRng};

    #[test]
    fn test_food_never_lands_on_snake() {
        let grid = Grid::new(10);
        let snake = Snake::new((0..10).map(|x| Position::new(x, 0)));
        let mut rng = SessionRng::new(3);
        for _ in 0..200 {
            let food = spawn_food(&grid, &snake, &mut rng).unwrap();
            assert!(!snake.contains(food));
            assert!(grid.contains(food));
        }
    }

    #[test]
    fn test_scripted_index_selects_free_cell_in_row_major_order() {
        let grid = Grid::new(10);
        let snake = Snake::new([Position::new(0, 0), Position::new(1, 0)]);
        let mut rng = ScriptedRandom::new().with_indices([0, 8]);
        assert_eq!(spawn_food(&grid, &snake, &mut rng), Some(Position::new(2, 0)));
        assert_eq!(spawn_food(&grid, &snake, &mut rng), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_full_board_has_no_free_cell() {
        let grid = Grid::new(1);
        let snake = Snake::new([Position::new(0, 0)]);
        assert_eq!(spawn_food(&grid, &snake, &mut ScriptedRandom::new()), None);
    }
}
