use super::{check_class, check_reward_score, LeaderboardStore};
use crate::{
    error::LeaderboardResult,
    model::{ClassScore, InsertOutcome, RankingEntry, RankingRow, Score, SkipReason},
    ranking,
    types::{CharacterId, ClassId, ScoreId},
};
use rusqlite::params;

impl LeaderboardStore {
    // ── Scores ────────────────────────────────────────────────────

    /// Insert a score; a repeated (character, class) pair is a no-op.
    pub fn insert_score(
        &self,
        char_id: CharacterId,
        class_id: ClassId,
        reward_score: i64,
    ) -> LeaderboardResult<InsertOutcome<ScoreId>> {
        check_class(class_id)?;
        check_reward_score(reward_score)?;
        let changed = self.conn.execute(
            "INSERT INTO scores (char_id, class_id, reward_score) VALUES (?1, ?2, ?3)
             ON CONFLICT (char_id, class_id) DO NOTHING",
            params![char_id, class_id, reward_score],
        )?;
        if changed == 0 {
            return Ok(InsertOutcome::Skipped(SkipReason::DuplicateScore));
        }
        Ok(InsertOutcome::Inserted(self.conn.last_insert_rowid()))
    }

    pub fn all_scores(&self) -> LeaderboardResult<Vec<Score>> {
        let mut stmt = self.conn.prepare(
            "SELECT score_id, char_id, class_id, reward_score FROM scores ORDER BY score_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Score {
                score_id: row.get(0)?,
                char_id: row.get(1)?,
                class_id: row.get(2)?,
                reward_score: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Every score held by the named player. Unknown names give an empty list.
    pub fn scores_for_username(&self, username: &str) -> LeaderboardResult<Vec<ClassScore>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.class_id, s.reward_score
             FROM scores s
             JOIN game_character c ON s.char_id = c.char_id
             JOIN account a ON c.acc_id = a.acc_id
             WHERE a.username = ?1
             ORDER BY c.class_id, s.score_id",
        )?;
        let rows = stmt.query_map(params![username], |row| {
            Ok(ClassScore {
                class_id: row.get(0)?,
                reward_score: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn score_count(&self) -> LeaderboardResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scores", [], |row| row.get(0))?;
        Ok(count)
    }

    // ── Rankings ──────────────────────────────────────────────────

    /// Scores joined to their owning account, in insertion order.
    pub fn ranking_entries(&self) -> LeaderboardResult<Vec<RankingEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.score_id, a.username, c.class_id, s.reward_score
             FROM scores s
             JOIN game_character c ON s.char_id = c.char_id
             JOIN account a ON c.acc_id = a.acc_id
             ORDER BY s.score_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RankingEntry {
                score_id: row.get(0)?,
                username: row.get(1)?,
                class_id: row.get(2)?,
                reward_score: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Per-class leaderboard for every stored score.
    pub fn rankings(&self) -> LeaderboardResult<Vec<RankingRow>> {
        let entries = self.ranking_entries()?;
        Ok(ranking::compute_rankings(entries))
    }
}
