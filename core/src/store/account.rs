use super::LeaderboardStore;
use crate::{
    error::LeaderboardResult,
    model::{Account, InsertOutcome, SkipReason},
    types::AccountId,
};
use rusqlite::{params, OptionalExtension};

impl LeaderboardStore {
    // ── Account ───────────────────────────────────────────────────

    /// Insert an account unless the username is already taken.
    pub fn insert_account(
        &self,
        username: &str,
        email: &str,
    ) -> LeaderboardResult<InsertOutcome<AccountId>> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM account WHERE username = ?1)",
            params![username],
            |row| row.get(0),
        )?;
        if exists {
            log::warn!("Username '{username}' already exists, skipping insertion");
            return Ok(InsertOutcome::Skipped(SkipReason::DuplicateUsername));
        }

        let outcome = self.insert_account_or_ignore(username, email)?;
        if let InsertOutcome::Inserted(acc_id) = outcome {
            log::info!("Added account {acc_id} ('{username}')");
        }
        Ok(outcome)
    }

    /// Single-statement insert that ignores a username conflict.
    pub fn insert_account_or_ignore(
        &self,
        username: &str,
        email: &str,
    ) -> LeaderboardResult<InsertOutcome<AccountId>> {
        let changed = self.conn.execute(
            "INSERT INTO account (username, email) VALUES (?1, ?2)
             ON CONFLICT (username) DO NOTHING",
            params![username, email],
        )?;
        if changed == 0 {
            return Ok(InsertOutcome::Skipped(SkipReason::DuplicateUsername));
        }
        Ok(InsertOutcome::Inserted(self.conn.last_insert_rowid()))
    }

    pub fn all_accounts(&self) -> LeaderboardResult<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare("SELECT acc_id, username, email FROM account ORDER BY acc_id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Account {
                acc_id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn account_ids(&self) -> LeaderboardResult<Vec<AccountId>> {
        let mut stmt = self.conn.prepare("SELECT acc_id FROM account ORDER BY acc_id")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    pub fn account_by_username(&self, username: &str) -> LeaderboardResult<Option<Account>> {
        let account = self
            .conn
            .query_row(
                "SELECT acc_id, username, email FROM account WHERE username = ?1",
                params![username],
                |row| {
                    Ok(Account {
                        acc_id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(account)
    }

    pub fn account_count(&self) -> LeaderboardResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM account", [], |row| row.get(0))?;
        Ok(count)
    }
}
