use std::env;
use std::path::PathBuf;

use chrono::{Datelike, Utc};

/// Runtime settings shared by the binaries, read from the environment (and
/// `.env` via dotenvy in each entry point).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Season id in NHL API form, e.g. "20252026".
    pub season: String,
    /// How many teammates to keep per anchored player.
    pub top_n: usize,
    /// Path to the props feed dump.
    pub props_path: PathBuf,
    /// Directory the correlation tables are written to and scanned from.
    pub tables_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let season = env::var("NHL_SEASON")
            .ok()
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(current_season);
        let top_n = env::var("SUGGEST_TOP_N")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(3)
            .clamp(1, 20);
        let props_path = env_path("PROPS_FILE").unwrap_or_else(|| PathBuf::from("dabble.json"));
        let tables_dir = env_path("TABLES_DIR").unwrap_or_else(|| PathBuf::from("."));

        Self {
            season,
            top_n,
            props_path,
            tables_dir,
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}

// Seasons roll over in the fall; from July onward the current year starts
// the new season id.
fn current_season() -> String {
    let today = Utc::now().date_naive();
    let start_year = if today.month() >= 7 {
        today.year()
    } else {
        today.year() - 1
    };
    format!("{}{}", start_year, start_year + 1)
}
