use super::{check_class, LeaderboardStore};
use crate::{
    error::LeaderboardResult,
    model::{Character, InsertOutcome, SkipReason},
    types::{AccountId, CharacterId, ClassId, MAX_CHARACTERS_PER_ACCOUNT},
};
use rusqlite::params;

impl LeaderboardStore {
    // ── Character ─────────────────────────────────────────────────

    /// Capacity-checked insert: an account holds at most
    /// `MAX_CHARACTERS_PER_ACCOUNT` characters. A repeated (account, class)
    /// pair is a no-op.
    pub fn insert_character(
        &self,
        acc_id: AccountId,
        class_id: ClassId,
    ) -> LeaderboardResult<InsertOutcome<CharacterId>> {
        check_class(class_id)?;

        let count = self.character_count_for_account(acc_id)?;
        if count >= MAX_CHARACTERS_PER_ACCOUNT {
            log::warn!(
                "Account {acc_id} already has {count} characters, cannot add class {class_id}"
            );
            return Ok(InsertOutcome::Skipped(SkipReason::CapacityExceeded { count }));
        }

        self.insert_character_unchecked(acc_id, class_id)
    }

    /// Insert without the per-account capacity check.
    pub fn insert_character_unchecked(
        &self,
        acc_id: AccountId,
        class_id: ClassId,
    ) -> LeaderboardResult<InsertOutcome<CharacterId>> {
        check_class(class_id)?;
        let changed = self.conn.execute(
            "INSERT INTO game_character (acc_id, class_id) VALUES (?1, ?2)
             ON CONFLICT (acc_id, class_id) DO NOTHING",
            params![acc_id, class_id],
        )?;
        if changed == 0 {
            return Ok(InsertOutcome::Skipped(SkipReason::DuplicateCharacter));
        }
        Ok(InsertOutcome::Inserted(self.conn.last_insert_rowid()))
    }

    pub fn all_characters(&self) -> LeaderboardResult<Vec<Character>> {
        let mut stmt = self.conn.prepare(
            "SELECT char_id, acc_id, class_id FROM game_character ORDER BY char_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Character {
                char_id: row.get(0)?,
                acc_id: row.get(1)?,
                class_id: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Every (char_id, class_id) pair, the sampling pool for score generation.
    pub fn character_keys(&self) -> LeaderboardResult<Vec<(CharacterId, ClassId)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT char_id, class_id FROM game_character ORDER BY char_id")?;
        let keys = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }

    pub fn character_count_for_account(&self, acc_id: AccountId) -> LeaderboardResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM game_character WHERE acc_id = ?1",
            params![acc_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn character_count(&self) -> LeaderboardResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM game_character", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Largest number of characters held by any single account (for tests).
    pub fn max_characters_per_account(&self) -> LeaderboardResult<i64> {
        let max: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(n), 0)
             FROM (SELECT COUNT(*) AS n FROM game_character GROUP BY acc_id)",
            [],
            |row| row.get(0),
        )?;
        Ok(max)
    }
}
