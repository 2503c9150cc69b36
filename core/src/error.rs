use thiserror::Error;

use crate::types::ClassId;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No valid accounts found, cannot insert characters")]
    NoAccounts,

    #[error("No valid characters found, cannot insert scores")]
    NoCharacters,

    #[error("Class id {class_id} is outside 1..=8")]
    InvalidClass { class_id: ClassId },

    #[error("Reward score {reward_score} is outside 0..=999")]
    InvalidRewardScore { reward_score: i64 },

    #[error("Seed run {run_id} aborted: {source}")]
    SeedRunAborted {
        run_id: String,
        #[source]
        source: Box<LeaderboardError>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
