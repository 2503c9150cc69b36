use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_DATABASE_URL: &str = "WIRA_DATABASE_URL";
pub const ENV_SEED: &str = "WIRA_SEED";

/// How many rows each generator stage attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedPlan {
    pub accounts: u64,
    pub characters: u64,
    pub scores: u64,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            accounts: 100_000,
            characters: 100_000,
            scores: 100_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Route generated characters through the 8-per-account capacity check.
    /// `false` inserts directly and only relies on the (account, class) key.
    pub enforce_character_cap: bool,
    /// Log a progress line every this many attempted rows. 0 disables it.
    pub progress_interval: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enforce_character_cap: true,
            progress_interval: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoAccount {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: String,
    pub seed: u64,
    pub plan: SeedPlan,
    pub generator: GeneratorConfig,
    /// Inserted through the checked path before generation starts.
    pub demo_account: Option<DemoAccount>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: "wira.db".into(),
            seed: 42,
            plan: SeedPlan::default(),
            generator: GeneratorConfig::default(),
            demo_account: Some(DemoAccount {
                username: "player3".into(),
                email: "player3@example.com".into(),
            }),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file. Missing fields fall back to the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Apply `WIRA_DATABASE_URL` / `WIRA_SEED` from the process environment.
    /// Call `load_dotenv` first so a `.env` file can supply them.
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_overrides(
            std::env::var(ENV_DATABASE_URL).ok(),
            std::env::var(ENV_SEED).ok(),
        )
    }

    /// Apply the overrides found in a dotenv-format file without touching
    /// the process environment.
    pub fn apply_env_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let mut database_url = None;
        let mut seed = None;
        for item in dotenvy::from_path_iter(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?
        {
            let (key, value) = item?;
            match key.as_str() {
                ENV_DATABASE_URL => database_url = Some(value),
                ENV_SEED => seed = Some(value),
                _ => {}
            }
        }
        self.apply_overrides(database_url, seed)
    }

    fn apply_overrides(
        &mut self,
        database_url: Option<String>,
        seed: Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(url) = database_url.filter(|u| !u.is_empty()) {
            self.database_path = url;
        }
        if let Some(raw) = seed {
            self.seed = raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("{ENV_SEED}={raw} is not a u64: {e}"))?;
        }
        Ok(())
    }

    /// Small in-memory setup for tests.
    pub fn default_test() -> Self {
        Self {
            database_path: ":memory:".into(),
            seed: 7,
            plan: SeedPlan {
                accounts: 200,
                characters: 600,
                scores: 600,
            },
            generator: GeneratorConfig {
                enforce_character_cap: true,
                progress_interval: 0,
            },
            demo_account: None,
        }
    }
}

/// Load `path`, or the nearest `.env` when `None`, into the process
/// environment. Variables already set win. A missing default `.env` is not
/// an error; a missing explicit file is.
pub fn load_dotenv(path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    let loaded = match path {
        Some(p) => dotenvy::from_path(p).map(|_| p.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(p) => Ok(Some(p)),
        Err(e) if path.is_none() && e.not_found() => Ok(None),
        Err(e) => Err(anyhow::anyhow!("Cannot load environment file: {e}")),
    }
}
