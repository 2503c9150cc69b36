//! Shared primitive types and domain limits.

/// Surrogate key of an `account` row.
pub type AccountId = i64;

/// Surrogate key of a `game_character` row.
pub type CharacterId = i64;

/// Surrogate key of a `scores` row.
pub type ScoreId = i64;

/// Game class identifier, always in `CLASS_MIN..=CLASS_MAX`.
pub type ClassId = i64;

/// The canonical seed run identifier.
pub type RunId = String;

pub const CLASS_MIN: ClassId = 1;
pub const CLASS_MAX: ClassId = 8;

/// An account may own at most this many characters.
pub const MAX_CHARACTERS_PER_ACCOUNT: i64 = 8;

pub const REWARD_SCORE_MIN: i64 = 0;
pub const REWARD_SCORE_MAX: i64 = 999;
