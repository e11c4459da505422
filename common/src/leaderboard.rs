use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local};

use crate::engine::GameMode;
use crate::session::GameOverSummary;
use crate::{EntryId, PlayerId, log};

/// The signed-in account a run's score is credited to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: PlayerId,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: EntryId,
    pub username: String,
    pub score: u32,
    pub mode: GameMode,
    pub date: DateTime<Local>,
    pub rank: u32,
}

pub trait LeaderboardStore: Send + Sync {
    fn submit_score(&self, user: &UserProfile, score: u32, mode: GameMode) -> Result<LeaderboardEntry, String>;

    /// Ranked entries, best first. Filtering keeps each entry's overall rank.
    fn entries(&self, mode: Option<GameMode>) -> Vec<LeaderboardEntry>;

    fn high_score(&self, username: &str) -> Option<u32>;
}

#[derive(Default)]
struct LeaderboardTable {
    entries: Vec<LeaderboardEntry>,
    high_scores: HashMap<String, u32>,
    next_id: u64,
}

impl LeaderboardTable {
    fn insert(&mut self, username: &str, score: u32, mode: GameMode, date: DateTime<Local>) -> EntryId {
        self.next_id += 1;
        let id = EntryId::new(format!("score-{}", self.next_id));
        self.entries.push(LeaderboardEntry {
            id: id.clone(),
            username: username.to_string(),
            score,
            mode,
            date,
            rank: 0,
        });

        let best = self.high_scores.entry(username.to_string()).or_insert(0);
        *best = (*best).max(score);

        // Stable sort: an equal score submitted later ranks below the earlier one.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }
        id
    }
}

/// Leaderboard held in memory, one instance per session or test.
#[derive(Default)]
pub struct InMemoryLeaderboard {
    table: Mutex<LeaderboardTable>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the board, e.g. from config.
    pub fn with_entries(seed: impl IntoIterator<Item = (String, u32, GameMode, DateTime<Local>)>) -> Self {
        let mut table = LeaderboardTable::default();
        for (username, score, mode, date) in seed {
            table.insert(&username, score, mode, date);
        }
        Self { table: Mutex::new(table) }
    }

    fn table(&self) -> MutexGuard<'_, LeaderboardTable> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LeaderboardStore for InMemoryLeaderboard {
    fn submit_score(&self, user: &UserProfile, score: u32, mode: GameMode) -> Result<LeaderboardEntry, String> {
        if user.username.trim().is_empty() {
            return Err("Cannot submit a score without a username".to_string());
        }

        let mut table = self.table();
        let id = table.insert(&user.username, score, mode, Local::now());
        table
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| format!("Entry {} vanished after insert", id))
    }

    fn entries(&self, mode: Option<GameMode>) -> Vec<LeaderboardEntry> {
        self.table()
            .entries
            .iter()
            .filter(|entry| mode.is_none_or(|m| entry.mode == m))
            .cloned()
            .collect()
    }

    fn high_score(&self, username: &str) -> Option<u32> {
        self.table().high_scores.get(username).copied()
    }
}

/// Sends finished runs to the leaderboard: once per run, only for a signed-in
/// user and a non-zero score.
pub struct ScoreSubmitter<S: LeaderboardStore> {
    store: S,
    last_submitted_run: Mutex<Option<u64>>,
}

impl<S: LeaderboardStore> ScoreSubmitter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_submitted_run: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `Ok(None)` when the run is not eligible or was already submitted.
    pub fn submit(
        &self,
        summary: &GameOverSummary,
        user: Option<&UserProfile>,
    ) -> Result<Option<LeaderboardEntry>, String> {
        let Some(user) = user else {
            log!("Run {} finished with {} points, not signed in so nothing submitted", summary.run_id, summary.score);
            return Ok(None);
        };
        if summary.score == 0 {
            return Ok(None);
        }

        let mut last = self
            .last_submitted_run
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *last == Some(summary.run_id) {
            return Ok(None);
        }

        match self.store.submit_score(user, summary.score, summary.mode) {
            Ok(entry) => {
                *last = Some(summary.run_id);
                log!(
                    "Submitted {} points ({}) for {}, rank {}",
                    entry.score,
                    entry.mode,
                    entry.username,
                    entry.rank
                );
                Ok(Some(entry))
            }
            Err(e) => {
                log!("Score submission for run {} failed: {}", summary.run_id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DeathReason;

    fn user(name: &str) -> UserProfile {
        UserProfile {
            id: PlayerId::new(format!("user-{}", name)),
            username: name.to_string(),
        }
    }

    fn summary(run_id: u64, score: u32, mode: GameMode) -> GameOverSummary {
        GameOverSummary {
            run_id,
            score,
            mode,
            reason: Some(DeathReason::WallCollision),
            length: 3 + (score / 10) as usize,
        }
    }

    fn seeded() -> InMemoryLeaderboard {
        let now = Local::now();
        InMemoryLeaderboard::with_entries([
            ("NeonViper".to_string(), 1250, GameMode::Walls, now),
            ("PixelMaster".to_string(), 1180, GameMode::Walls, now),
            ("RetroGamer".to_string(), 1050, GameMode::PassThrough, now),
            ("CyberSnake".to_string(), 980, GameMode::Walls, now),
            ("ArcadeKing".to_string(), 920, GameMode::PassThrough, now),
        ])
    }

    #[test]
    fn test_entries_are_ranked_by_score() {
        let board = seeded();
        let ranks: Vec<(String, u32)> = board
            .entries(None)
            .into_iter()
            .map(|e| (e.username, e.rank))
            .collect();
        assert_eq!(ranks[0], ("NeonViper".to_string(), 1));
        assert_eq!(ranks[4], ("ArcadeKing".to_string(), 5));
    }

    #[test]
    fn test_filter_by_mode_keeps_global_rank() {
        let board = seeded();
        let pass_through = board.entries(Some(GameMode::PassThrough));
        assert_eq!(pass_through.len(), 2);
        assert!(pass_through.iter().all(|e| e.mode == GameMode::PassThrough));
        assert_eq!(pass_through[0].rank, 3);
    }

    #[test]
    fn test_submission_reranks_and_tracks_high_score() {
        let board = seeded();
        let entry = board.submit_score(&user("NeonViper"), 9999, GameMode::Walls).unwrap();
        assert_eq!(entry.rank, 1);
        assert_eq!(board.entries(None)[1].username, "NeonViper");
        assert_eq!(board.entries(None)[1].rank, 2);
        assert_eq!(board.high_score("NeonViper"), Some(9999));

        board.submit_score(&user("NeonViper"), 10, GameMode::Walls).unwrap();
        assert_eq!(board.high_score("NeonViper"), Some(9999));
    }

    #[test]
    fn test_ties_rank_earlier_submission_first() {
        let board = InMemoryLeaderboard::new();
        board.submit_score(&user("first"), 100, GameMode::Walls).unwrap();
        let later = board.submit_score(&user("second"), 100, GameMode::Walls).unwrap();
        assert_eq!(later.rank, 2);
    }

    #[test]
    fn test_submitter_requires_user_and_points() {
        let submitter = ScoreSubmitter::new(InMemoryLeaderboard::new());
        assert_eq!(submitter.submit(&summary(1, 50, GameMode::Walls), None), Ok(None));
        assert_eq!(submitter.submit(&summary(2, 0, GameMode::Walls), Some(&user("ana"))), Ok(None));
        assert!(submitter.store().entries(None).is_empty());
    }

    #[test]
    fn test_submitter_sends_each_run_once() {
        let submitter = ScoreSubmitter::new(InMemoryLeaderboard::new());
        let player = user("ana");

        let first = submitter.submit(&summary(7, 120, GameMode::PassThrough), Some(&player)).unwrap();
        assert_eq!(first.map(|e| (e.score, e.mode)), Some((120, GameMode::PassThrough)));
        assert_eq!(submitter.submit(&summary(7, 120, GameMode::PassThrough), Some(&player)), Ok(None));

        assert!(submitter.submit(&summary(8, 30, GameMode::Walls), Some(&player)).unwrap().is_some());
        assert_eq!(submitter.store().entries(None).len(), 2);
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let board = InMemoryLeaderboard::new();
        assert!(board.submit_score(&user(" "), 10, GameMode::Walls).is_err());
    }
}
