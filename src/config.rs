use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "bmsearch";
const CONFIG_FILE: &str = "config.json";

/// User configuration stored in the platform config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Colorize output when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    /// Print the per-round shift narration by default
    #[serde(default)]
    pub trace: bool,

    /// Fold ASCII case on both text and pattern before searching
    #[serde(default)]
    pub ignore_case: bool,

    /// Log progress to stderr
    #[serde(default)]
    pub verbose: bool,

    /// Files searched in parallel when several are given.
    /// If 0, uses the number of CPU cores
    #[serde(default)]
    pub threads: usize,
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            trace: false,
            ignore_case: false,
            verbose: false,
            threads: 0,
        }
    }
}

impl AppConfig {
    /// Load config with priority: environment variables > config file > defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read the config file, or return defaults if there is none
    pub fn load_from_file() -> Result<Self> {
        let Some(config_path) = get_config_path() else {
            return Ok(Self::default());
        };

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            let config: AppConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `BMSEARCH_*` overrides. Unparseable values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BMSEARCH_COLOR").as_deref().and_then(parse_flag) {
            self.color = v;
        }

        if let Some(v) = lookup("BMSEARCH_TRACE").as_deref().and_then(parse_flag) {
            self.trace = v;
        }

        if let Some(v) = lookup("BMSEARCH_IGNORE_CASE").as_deref().and_then(parse_flag) {
            self.ignore_case = v;
        }

        if let Some(v) = lookup("BMSEARCH_VERBOSE").as_deref().and_then(parse_flag) {
            self.verbose = v;
        }

        if let Some(val) = lookup("BMSEARCH_THREADS") {
            if let Ok(n) = val.trim().parse() {
                self.threads = n;
            }
        }
    }

    /// Get the effective thread count (resolves 0 to CPU count)
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        } else {
            self.threads
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Path of the config file, if the platform has a config directory
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}
