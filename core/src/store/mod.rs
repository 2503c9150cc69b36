//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The generator and the ranking aggregator call store methods, they never
//! execute SQL directly. The store is always passed in as a handle.

mod account;
mod character;
mod score;
mod seed_run;

use crate::{
    error::{LeaderboardError, LeaderboardResult},
    types::{ClassId, CLASS_MAX, CLASS_MIN, REWARD_SCORE_MAX, REWARD_SCORE_MIN},
};
use rusqlite::Connection;

pub struct LeaderboardStore {
    conn: Connection,
}

impl LeaderboardStore {
    /// Open (or create) the leaderboard database at `path`.
    pub fn open(path: &str) -> LeaderboardResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        log::debug!("Opened leaderboard database at {path}");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> LeaderboardResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order. Safe to run more than once.
    pub fn migrate(&self) -> LeaderboardResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_leaderboard.sql"))?;
        Ok(())
    }
}

fn check_class(class_id: ClassId) -> LeaderboardResult<()> {
    if (CLASS_MIN..=CLASS_MAX).contains(&class_id) {
        Ok(())
    } else {
        Err(LeaderboardError::InvalidClass { class_id })
    }
}

fn check_reward_score(reward_score: i64) -> LeaderboardResult<()> {
    if (REWARD_SCORE_MIN..=REWARD_SCORE_MAX).contains(&reward_score) {
        Ok(())
    } else {
        Err(LeaderboardError::InvalidRewardScore { reward_score })
    }
}
