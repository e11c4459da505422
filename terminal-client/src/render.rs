use snake_common::leaderboard::LeaderboardEntry;
use snake_common::{ActivePlayer, GameState, Grid, Position, Snake};

const EMPTY: char = '.';
const FOOD: char = '*';
const HEAD: char = '@';
const BODY: char = 'o';

/// One text row per grid row. Segments outside the grid are not drawn.
pub fn render_board(grid: &Grid, snake: &Snake, food: Position) -> String {
    let size = grid.size() as usize;
    let mut rows = vec![vec![EMPTY; size]; size];

    let mut place = |position: Position, mark: char| {
        if grid.contains(position) {
            rows[position.y as usize][position.x as usize] = mark;
        }
    };
    place(food, FOOD);
    for segment in snake.segments().skip(1) {
        place(*segment, BODY);
    }
    place(snake.head(), HEAD);

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_game(state: &GameState) -> String {
    format!(
        "score {} | speed {}ms | {} | {}\n{}",
        state.score,
        state.speed_ms,
        state.mode,
        state.status,
        render_board(&state.grid, &state.snake, state.food)
    )
}

pub fn render_player(player: &ActivePlayer, grid: &Grid) -> String {
    format!(
        "watching {} | score {} | {} | {}\n{}",
        player.username,
        player.score,
        player.mode,
        player.status,
        render_board(grid, &player.snake, player.food)
    )
}

pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No scores yet".to_string();
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                "{:>3}. {:<16} {:>6}  {:<12} {}",
                entry.rank,
                entry.username,
                entry.score,
                entry.mode.to_string(),
                entry.date.format("%Y-%m-%d")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
