//! Bulk fake data generation.
//!
//! RULES:
//!   - Characters are only generated for accounts that already exist, and
//!     scores only for characters that already exist. Each stage loads its
//!     key pool once, up front, and samples from it uniformly.
//!   - Constraint conflicts are skipped and counted, never fatal.
//!   - Any database error aborts the stage.
//!   - All randomness comes from the injected RngBank.

use crate::{
    config::GeneratorConfig,
    error::{LeaderboardError, LeaderboardResult},
    model::InsertOutcome,
    name_generator::NameGenerator,
    rng::{GeneratorSlot, RngBank, StageRng},
    store::LeaderboardStore,
    types::{CLASS_MAX, CLASS_MIN, REWARD_SCORE_MAX, REWARD_SCORE_MIN},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub stage: &'static str,
    pub requested: u64,
    pub inserted: u64,
    pub skipped: u64,
}

impl GenerationReport {
    fn new(stage: &'static str, requested: u64) -> Self {
        Self {
            stage,
            requested,
            inserted: 0,
            skipped: 0,
        }
    }

    fn record<Id>(&mut self, outcome: InsertOutcome<Id>) {
        match outcome {
            InsertOutcome::Inserted(_) => self.inserted += 1,
            InsertOutcome::Skipped(reason) => {
                log::debug!("{}: skipped row ({reason:?})", self.stage);
                self.skipped += 1;
            }
        }
    }
}

pub struct FakeDataGenerator<'a> {
    store: &'a LeaderboardStore,
    account_rng: StageRng,
    character_rng: StageRng,
    score_rng: StageRng,
    config: GeneratorConfig,
}

impl<'a> FakeDataGenerator<'a> {
    pub fn new(store: &'a LeaderboardStore, rng_bank: RngBank, config: GeneratorConfig) -> Self {
        Self {
            store,
            account_rng: rng_bank.for_stage(GeneratorSlot::Account),
            character_rng: rng_bank.for_stage(GeneratorSlot::Character),
            score_rng: rng_bank.for_stage(GeneratorSlot::Score),
            config,
        }
    }

    /// Attempt `n` accounts with synthetic usernames; taken names are skipped.
    pub fn generate_accounts(&mut self, n: u64) -> LeaderboardResult<GenerationReport> {
        log::info!("Generating {n} fake accounts");
        let mut report = GenerationReport::new(self.account_rng.name, n);

        for i in 0..n {
            let username = NameGenerator::username(&mut self.account_rng);
            let email = NameGenerator::email(&mut self.account_rng);
            report.record(self.store.insert_account_or_ignore(&username, &email)?);
            self.log_progress(&report, i);
        }

        log::info!(
            "Fake accounts done: {} inserted, {} skipped",
            report.inserted,
            report.skipped
        );
        Ok(report)
    }

    /// Attempt `n` characters on uniformly chosen existing accounts.
    pub fn generate_characters(&mut self, n: u64) -> LeaderboardResult<GenerationReport> {
        log::info!("Generating {n} fake characters");
        let acc_ids = self.store.account_ids()?;
        if acc_ids.is_empty() {
            return Err(LeaderboardError::NoAccounts);
        }

        let mut report = GenerationReport::new(self.character_rng.name, n);
        for i in 0..n {
            let acc_id = *self.character_rng.pick(&acc_ids);
            let class_id = self.character_rng.between(CLASS_MIN, CLASS_MAX);
            let outcome = if self.config.enforce_character_cap {
                self.store.insert_character(acc_id, class_id)?
            } else {
                self.store.insert_character_unchecked(acc_id, class_id)?
            };
            report.record(outcome);
            self.log_progress(&report, i);
        }

        log::info!(
            "Fake characters done: {} inserted, {} skipped",
            report.inserted,
            report.skipped
        );
        Ok(report)
    }

    /// Attempt `n` scores on uniformly chosen existing characters, using each
    /// character's own class.
    pub fn generate_scores(&mut self, n: u64) -> LeaderboardResult<GenerationReport> {
        log::info!("Generating {n} fake scores");
        let characters = self.store.character_keys()?;
        if characters.is_empty() {
            return Err(LeaderboardError::NoCharacters);
        }

        let mut report = GenerationReport::new(self.score_rng.name, n);
        for i in 0..n {
            let (char_id, class_id) = *self.score_rng.pick(&characters);
            let reward_score = self.score_rng.between(REWARD_SCORE_MIN, REWARD_SCORE_MAX);
            report.record(self.store.insert_score(char_id, class_id, reward_score)?);
            self.log_progress(&report, i);
        }

        log::info!(
            "Fake scores done: {} inserted, {} skipped",
            report.inserted,
            report.skipped
        );
        Ok(report)
    }

    fn log_progress(&self, report: &GenerationReport, i: u64) {
        let every = self.config.progress_interval;
        if every > 0 && (i + 1).is_multiple_of(every) {
            log::info!(
                "{}: {}/{} attempted ({} inserted)",
                report.stage,
                i + 1,
                report.requested,
                report.inserted
            );
        }
    }
}
