use std::collections::HashMap;
use std::env;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use serde_json::Value;

use crate::correlation::GoalEvent;
use crate::http_client::get_with_retry;

const NHL_API_BASE: &str = "https://api-web.nhle.com/v1";

/// A finished game from the club schedule; only these carry usable
/// play-by-play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedGame {
    pub id: u64,
    pub date: String,
}

/// One goal from play-by-play, still keyed by raw NHL player ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPlay {
    pub scorer: Option<i64>,
    pub assist1: Option<i64>,
    pub assist2: Option<i64>,
}

/// Roster id→name map across forwards, defensemen, and goalies. Names arrive
/// either as localized objects (`{"default": "Connor"}`) or plain strings.
pub fn parse_roster_json(raw: &str) -> Result<HashMap<i64, String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(HashMap::new());
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid roster json")?;

    let mut out = HashMap::new();
    for group in ["forwards", "defensemen", "goalies"] {
        let Some(players) = v.get(group).and_then(|x| x.as_array()) else {
            continue;
        };
        for player in players {
            let Some(id) = player.get("id").and_then(|x| x.as_i64()) else {
                continue;
            };
            let first = name_field(player.get("firstName"));
            let last = name_field(player.get("lastName"));
            let full = format!("{first} {last}").trim().to_string();
            if full.is_empty() {
                continue;
            }
            out.insert(id, full);
        }
    }
    Ok(out)
}

fn name_field(v: Option<&Value>) -> String {
    match v {
        Some(Value::Object(map)) => map
            .get("default")
            .and_then(|x| x.as_str())
            .unwrap_or_default()
            .to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Completed games only: the schedule marks finished games with an
/// "OFF"-prefixed game state.
pub fn parse_schedule_json(raw: &str) -> Result<Vec<CompletedGame>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid schedule json")?;

    let mut out = Vec::new();
    let Some(games) = v.get("games").and_then(|x| x.as_array()) else {
        return Ok(out);
    };
    for game in games {
        let state = game
            .get("gameState")
            .and_then(|x| x.as_str())
            .unwrap_or_default();
        if !state.starts_with("OFF") {
            continue;
        }
        let Some(id) = game.get("id").and_then(|x| x.as_u64()) else {
            continue;
        };
        let date = game
            .get("gameDate")
            .and_then(|x| x.as_str())
            .unwrap_or_default()
            .to_string();
        out.push(CompletedGame { id, date });
    }
    Ok(out)
}

/// Goals credited to `team_id` in one game's play-by-play; the other team's
/// goals are filtered out here.
pub fn parse_goal_plays_json(raw: &str, team_id: u32) -> Result<Vec<ScoringPlay>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid play-by-play json")?;

    let mut out = Vec::new();
    let Some(plays) = v.get("plays").and_then(|x| x.as_array()) else {
        return Ok(out);
    };
    for play in plays {
        if play.get("typeDescKey").and_then(|x| x.as_str()) != Some("goal") {
            continue;
        }
        let Some(details) = play.get("details") else {
            continue;
        };
        if details.get("eventOwnerTeamId").and_then(|x| x.as_u64()) != Some(u64::from(team_id)) {
            continue;
        }
        out.push(ScoringPlay {
            scorer: details.get("scoringPlayerId").and_then(|x| x.as_i64()),
            assist1: details.get("assist1PlayerId").and_then(|x| x.as_i64()),
            assist2: details.get("assist2PlayerId").and_then(|x| x.as_i64()),
        });
    }
    Ok(out)
}

/// Map raw ids to display names. Ids the roster map does not cover pass
/// through as their decimal text so a table can still be built when name
/// resolution is incomplete.
pub fn resolve_scoring_plays(
    game: &CompletedGame,
    plays: &[ScoringPlay],
    names: &HashMap<i64, String>,
) -> Vec<GoalEvent> {
    let resolve = |id: Option<i64>| {
        id.map(|id| names.get(&id).cloned().unwrap_or_else(|| id.to_string()))
    };
    plays
        .iter()
        .map(|play| GoalEvent {
            game_id: game.id,
            date: game.date.clone(),
            scorer: resolve(play.scorer),
            assist1: resolve(play.assist1),
            assist2: resolve(play.assist2),
        })
        .collect()
}

pub fn fetch_team_roster(abbr: &str, season: &str) -> Result<HashMap<i64, String>> {
    let url = format!("{NHL_API_BASE}/roster/{abbr}/{season}");
    let body = get_with_retry(&url).context("roster request failed")?;
    parse_roster_json(&body)
}

pub fn fetch_completed_games(abbr: &str, season: &str) -> Result<Vec<CompletedGame>> {
    let url = format!("{NHL_API_BASE}/club-schedule-season/{abbr}/{season}");
    let body = get_with_retry(&url).context("schedule request failed")?;
    parse_schedule_json(&body)
}

/// Fetch and resolve every goal `team_id` scored across `games`. Requests
/// fan out on a bounded pool; a game that still fails after retries is
/// skipped with a warning instead of sinking the whole team.
pub fn fetch_team_goal_events(
    team_id: u32,
    games: &[CompletedGame],
    names: &HashMap<i64, String>,
) -> (Vec<GoalEvent>, Vec<String>) {
    let results: Vec<Result<Vec<GoalEvent>>> = with_fetch_pool(|| {
        games
            .par_iter()
            .map(|game| {
                let url = format!("{NHL_API_BASE}/gamecenter/{}/play-by-play", game.id);
                let body = get_with_retry(&url)
                    .with_context(|| format!("play-by-play request failed for game {}", game.id))?;
                let plays = parse_goal_plays_json(&body, team_id)?;
                Ok(resolve_scoring_plays(game, &plays, names))
            })
            .collect()
    });

    let mut events = Vec::new();
    let mut warnings = Vec::new();
    for (game, result) in games.iter().zip(results) {
        match result {
            Ok(mut batch) => events.append(&mut batch),
            Err(err) => warnings.push(format!("game {} skipped: {err:#}", game.id)),
        }
    }
    (events, warnings)
}

fn with_fetch_pool<T: Send>(action: impl FnOnce() -> T + Send) -> T {
    static POOL: OnceCell<Option<rayon::ThreadPool>> = OnceCell::new();
    let pool = POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(fetch_parallelism())
            .build()
            .ok()
    });
    if let Some(pool) = pool.as_ref() {
        pool.install(action)
    } else {
        action()
    }
}

fn fetch_parallelism() -> usize {
    env::var("FETCH_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(6)
        .clamp(2, 32)
}
