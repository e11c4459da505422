use snake_common::{Direction, GameMode};

/// A line typed while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    Turn(Direction),
    TogglePause,
    Start,
    Reset,
    SetMode(GameMode),
    ShowLeaderboard,
    Quit,
}

/// Blank lines come back as `Ok(None)`. A line of spaces is the pause key.
pub fn parse_command(line: &str) -> Result<Option<PlayCommand>, String> {
    if line.is_empty() {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Some(PlayCommand::TogglePause));
    }

    let lowered = trimmed.to_ascii_lowercase();
    let mut words = lowered.split_whitespace();
    let command = match (words.next(), words.next(), words.next()) {
        (Some("w" | "up"), None, None) => PlayCommand::Turn(Direction::Up),
        (Some("s" | "down"), None, None) => PlayCommand::Turn(Direction::Down),
        (Some("a" | "left"), None, None) => PlayCommand::Turn(Direction::Left),
        (Some("d" | "right"), None, None) => PlayCommand::Turn(Direction::Right),
        (Some("p" | "pause" | "space"), None, None) => PlayCommand::TogglePause,
        (Some("n" | "start"), None, None) => PlayCommand::Start,
        (Some("r" | "reset"), None, None) => PlayCommand::Reset,
        (Some("l" | "leaderboard"), None, None) => PlayCommand::ShowLeaderboard,
        (Some("q" | "quit"), None, None) => PlayCommand::Quit,
        (Some("mode"), Some(mode), None) => PlayCommand::SetMode(mode.parse()?),
        _ => return Err(format!("Unknown command: {}", trimmed)),
    };
    Ok(Some(command))
}
