//! seed-runner: headless seeding and ranking report for the WIRA leaderboard.
//!
//! Usage:
//!   seed-runner --db wira.db --seed 42 --accounts 100000 --characters 100000 --scores 100000
//!   seed-runner --config seed.json --top 10 --player player3 --json
//!   seed-runner --env-file staging.env
//!
//! A `.env` file in the working directory (or `--env-file`) may set
//! `WIRA_DATABASE_URL`, `WIRA_SEED` and `RUST_LOG`.

use anyhow::{bail, Result};
use serde::Serialize;
use std::env;
use std::path::Path;
use wira_core::{
    config::{self, AppConfig},
    model::{ClassScore, InsertOutcome, RankingRow},
    pipeline::{SeedPipeline, SeedSummary},
    ranking,
    store::LeaderboardStore,
};

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a SeedSummary,
    accounts: i64,
    characters: i64,
    scores: i64,
    top: Vec<RankingRow>,
    player: Option<PlayerReport>,
}

#[derive(Serialize)]
struct PlayerReport {
    username: String,
    scores: Vec<ClassScore>,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    // Before the logger, so RUST_LOG can come from the file.
    let env_file = config::load_dotenv(find_arg(&args, "--env-file")?.map(Path::new))?;
    env_logger::init();
    if let Some(path) = env_file {
        log::info!("Loaded environment from {}", path.display());
    }

    let mut config = match find_arg(&args, "--config")? {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply_env()?;

    if let Some(db) = find_arg(&args, "--db")? {
        config.database_path = db.to_string();
    }
    config.seed = parse_arg(&args, "--seed", config.seed)?;
    config.plan.accounts = parse_arg(&args, "--accounts", config.plan.accounts)?;
    config.plan.characters = parse_arg(&args, "--characters", config.plan.characters)?;
    config.plan.scores = parse_arg(&args, "--scores", config.plan.scores)?;
    let top = parse_arg(&args, "--top", 10usize)?;
    let player = find_arg(&args, "--player")?.map(str::to_string);
    let json = args.iter().any(|a| a == "--json");

    log::info!(
        "Seeding {} (seed {}, plan {:?})",
        config.database_path,
        config.seed,
        config.plan
    );

    let store = LeaderboardStore::open(&config.database_path)?;
    store.migrate()?;

    if let Some(demo) = &config.demo_account {
        if let InsertOutcome::Skipped(reason) = store.insert_account(&demo.username, &demo.email)? {
            log::info!("Demo account '{}' not added: {reason:?}", demo.username);
        }
    }

    let summary = SeedPipeline::new(&store, config.seed, config.generator).run(&config.plan)?;

    let rankings = store.rankings()?;
    let player = match player {
        Some(username) => Some(PlayerReport {
            scores: store.scores_for_username(&username)?,
            username,
        }),
        None => None,
    };
    let report = Report {
        summary: &summary,
        accounts: store.account_count()?,
        characters: store.character_count()?,
        scores: store.score_count()?,
        top: ranking::top_per_class(&rankings, top),
        player,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &Report<'_>) {
    let s = report.summary;
    println!("=== SEED RUN ===");
    println!("  run_id:      {}", s.run_id);
    println!("  seed:        {}", s.seed);
    for stage in [&s.accounts, &s.characters, &s.scores] {
        println!(
            "  {:<11}  {} requested | {} inserted | {} skipped",
            stage.stage, stage.requested, stage.inserted, stage.skipped
        );
    }
    println!(
        "  totals:      {} accounts | {} characters | {} scores",
        report.accounts, report.characters, report.scores
    );

    println!();
    println!("=== RANKINGS ===");
    if report.top.is_empty() {
        println!("  (No scores yet)");
    }
    for row in &report.top {
        println!(
            "  Class {} | Rank {:>4} | {:<24} | {}",
            row.class_id, row.rank, row.username, row.reward_score
        );
    }

    if let Some(player) = &report.player {
        println!();
        println!("=== SCORES FOR {} ===", player.username);
        if player.scores.is_empty() {
            println!("  (none)");
        }
        for score in &player.scores {
            println!("  Class {} | {}", score.class_id, score.reward_score);
        }
    }
}

/// Value following `flag`, if the flag is present. A flag followed by
/// nothing or by another `--flag` is an error.
fn find_arg<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(pos + 1) {
        Some(value) if !value.starts_with("--") => Ok(Some(value.as_str())),
        _ => bail!("{flag} needs a value"),
    }
}

fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match find_arg(args, flag)? {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{flag}={raw} is invalid: {e}")),
        None => Ok(default),
    }
}
