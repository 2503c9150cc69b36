//! Store methods for the seed_run audit table.

use super::LeaderboardStore;
use crate::{
    error::LeaderboardResult,
    model::{SeedRunRecord, SeedRunStatus, StageCounts},
};
use rusqlite::{params, types::Type, OptionalExtension};

impl LeaderboardStore {
    /// Open a seed_run row in the `running` state.
    pub fn insert_seed_run(
        &self,
        run_id: &str,
        seed: u64,
        version: &str,
        started_at: &str,
    ) -> LeaderboardResult<()> {
        self.conn.execute(
            "INSERT INTO seed_run (run_id, seed, version, started_at, status)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                run_id,
                seed as i64,
                version,
                started_at,
                SeedRunStatus::Running.as_str()
            ],
        )?;
        Ok(())
    }

    /// Close a seed_run row as `complete` or `failed` with the rows it inserted.
    pub fn finish_seed_run(
        &self,
        run_id: &str,
        status: SeedRunStatus,
        counts: StageCounts,
        finished_at: &str,
        error: Option<&str>,
    ) -> LeaderboardResult<()> {
        self.conn.execute(
            "UPDATE seed_run
             SET status = ?1, finished_at = ?2, error = ?3,
                 accounts_inserted = ?4, characters_inserted = ?5, scores_inserted = ?6
             WHERE run_id = ?7",
            params![
                status.as_str(),
                finished_at,
                error,
                counts.accounts as i64,
                counts.characters as i64,
                counts.scores as i64,
                run_id
            ],
        )?;
        Ok(())
    }

    pub fn seed_run(&self, run_id: &str) -> LeaderboardResult<Option<SeedRunRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT run_id, seed, version, started_at, finished_at, status, error,
                        accounts_inserted, characters_inserted, scores_inserted
                 FROM seed_run WHERE run_id = ?1",
                params![run_id],
                |row| {
                    let raw_status: String = row.get(5)?;
                    let status = SeedRunStatus::parse(&raw_status).ok_or_else(|| {
                        rusqlite::Error::FromSqlConversionFailure(
                            5,
                            Type::Text,
                            format!("unknown seed_run status '{raw_status}'").into(),
                        )
                    })?;
                    Ok(SeedRunRecord {
                        run_id: row.get(0)?,
                        seed: row.get::<_, i64>(1)? as u64,
                        version: row.get(2)?,
                        started_at: row.get(3)?,
                        finished_at: row.get(4)?,
                        status,
                        error: row.get(6)?,
                        accounts_inserted: row.get(7)?,
                        characters_inserted: row.get(8)?,
                        scores_inserted: row.get(9)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}
