//! The seed pipeline: one reproducible population of the leaderboard.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Accounts
//!   2. Characters  (sampled from accounts)
//!   3. Scores      (sampled from characters)
//!
//! The master seed and the inserted counts are recorded on a seed_run row,
//! so the same seed against an empty database reproduces the same rows.
//! Stages are not wrapped in a transaction: rows from stages that finished
//! before a failure stay committed and are counted on the `failed` row.

use crate::{
    config::{GeneratorConfig, SeedPlan},
    error::{LeaderboardError, LeaderboardResult},
    generator::{FakeDataGenerator, GenerationReport},
    model::{SeedRunStatus, StageCounts},
    rng::RngBank,
    store::LeaderboardStore,
    types::RunId,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub run_id: RunId,
    pub seed: u64,
    pub accounts: GenerationReport,
    pub characters: GenerationReport,
    pub scores: GenerationReport,
}

pub struct SeedPipeline<'a> {
    store: &'a LeaderboardStore,
    seed: u64,
    config: GeneratorConfig,
}

impl<'a> SeedPipeline<'a> {
    pub fn new(store: &'a LeaderboardStore, seed: u64, config: GeneratorConfig) -> Self {
        Self {
            store,
            seed,
            config,
        }
    }

    /// Run every stage in order. On failure the seed_run row is closed as
    /// `failed` with the rows committed so far, and the error carries the
    /// run id.
    pub fn run(&self, plan: &SeedPlan) -> LeaderboardResult<SeedSummary> {
        let run_id = format!("seed-{}", uuid::Uuid::new_v4());
        let started_at = chrono::Utc::now().to_rfc3339();
        self.store
            .insert_seed_run(&run_id, self.seed, env!("CARGO_PKG_VERSION"), &started_at)?;
        log::info!("Seed run {run_id} started (seed {})", self.seed);

        let baseline = self.committed_counts()?;
        match self.run_stages(plan) {
            Ok((accounts, characters, scores)) => {
                let counts = StageCounts {
                    accounts: accounts.inserted,
                    characters: characters.inserted,
                    scores: scores.inserted,
                };
                self.store.finish_seed_run(
                    &run_id,
                    SeedRunStatus::Complete,
                    counts,
                    &chrono::Utc::now().to_rfc3339(),
                    None,
                )?;
                log::info!("Seed run {run_id} complete");

                Ok(SeedSummary {
                    run_id,
                    seed: self.seed,
                    accounts,
                    characters,
                    scores,
                })
            }
            Err(source) => {
                log::error!("Seed run {run_id} failed: {source}");
                let now = self.committed_counts()?;
                let counts = StageCounts {
                    accounts: now.accounts.saturating_sub(baseline.accounts),
                    characters: now.characters.saturating_sub(baseline.characters),
                    scores: now.scores.saturating_sub(baseline.scores),
                };
                self.store.finish_seed_run(
                    &run_id,
                    SeedRunStatus::Failed,
                    counts,
                    &chrono::Utc::now().to_rfc3339(),
                    Some(&source.to_string()),
                )?;

                Err(LeaderboardError::SeedRunAborted {
                    run_id,
                    source: Box::new(source),
                })
            }
        }
    }

    fn run_stages(
        &self,
        plan: &SeedPlan,
    ) -> LeaderboardResult<(GenerationReport, GenerationReport, GenerationReport)> {
        let mut generator =
            FakeDataGenerator::new(self.store, RngBank::new(self.seed), self.config);
        let accounts = generator.generate_accounts(plan.accounts)?;
        let characters = generator.generate_characters(plan.characters)?;
        let scores = generator.generate_scores(plan.scores)?;
        Ok((accounts, characters, scores))
    }

    /// Table sizes, used to measure what a failed run left behind.
    fn committed_counts(&self) -> LeaderboardResult<StageCounts> {
        Ok(StageCounts {
            accounts: self.store.account_count()? as u64,
            characters: self.store.character_count()? as u64,
            scores: self.store.score_count()? as u64,
        })
    }
}
