//! Row types returned by the store and the ranking aggregator.

use crate::types::{AccountId, CharacterId, ClassId, ScoreId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub acc_id: AccountId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub char_id: CharacterId,
    pub acc_id: AccountId,
    pub class_id: ClassId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub score_id: ScoreId,
    pub char_id: CharacterId,
    pub class_id: ClassId,
    pub reward_score: i64,
}

/// One score of a player, as listed by username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassScore {
    pub class_id: ClassId,
    pub reward_score: i64,
}

/// A joined score row fed to the ranking aggregator.
/// `score_id` carries insertion order for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub score_id: ScoreId,
    pub username: String,
    pub class_id: ClassId,
    pub reward_score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    pub username: String,
    pub class_id: ClassId,
    pub reward_score: i64,
    pub rank: u64,
}

/// Why an insert wrote nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    DuplicateUsername,
    DuplicateCharacter,
    DuplicateScore,
    CapacityExceeded { count: i64 },
}

/// Result of an insert that tolerates constraint conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome<Id> {
    Inserted(Id),
    Skipped(SkipReason),
}

impl<Id> InsertOutcome<Id> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    pub fn inserted_id(self) -> Option<Id> {
        match self {
            Self::Inserted(id) => Some(id),
            Self::Skipped(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedRunStatus {
    Running,
    Complete,
    Failed,
}

impl SeedRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "running" => Some(Self::Running),
            "complete" => Some(Self::Complete),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Rows inserted per generator stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    pub accounts: u64,
    pub characters: u64,
    pub scores: u64,
}

/// A seed_run row: one execution of the seed pipeline.
/// A failed run keeps the counts committed before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRunRecord {
    pub run_id: String,
    pub seed: u64,
    pub version: String,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub status: SeedRunStatus,
    pub error: Option<String>,
    pub accounts_inserted: i64,
    pub characters_inserted: i64,
    pub scores_inserted: i64,
}
