use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Point-producing markets worth pairing; everything else in the feed is
/// ignored at ingestion.
pub const TARGET_MARKETS: [&str; 3] = ["Player Goals", "Player Assists", "Player Points"];

/// One active proposition line, grouped under its matchup label.
#[derive(Debug, Clone, PartialEq)]
pub struct PropListing {
    pub player: String,
    pub market: String,
    pub selection: String,
}

pub fn load_props_file(path: &Path) -> Result<HashMap<String, Vec<PropListing>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read props feed {}", path.display()))?;
    parse_props_json(&raw)
}

/// Parse the raw props feed dump: an array of responses, each carrying a
/// `result.data.json` list of lines. Lines are grouped by a
/// "Home Team @ Away Team" label; off-market and player-less lines are
/// dropped.
pub fn parse_props_json(raw: &str) -> Result<HashMap<String, Vec<PropListing>>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(HashMap::new());
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid props json")?;

    let mut games: HashMap<String, Vec<PropListing>> = HashMap::new();
    let Some(entries) = v.as_array() else {
        return Ok(games);
    };

    for entry in entries {
        let Some(lines) = entry
            .get("result")
            .and_then(|x| x.get("data"))
            .and_then(|x| x.get("json"))
            .and_then(|x| x.as_array())
        else {
            continue;
        };

        for line in lines {
            let market = text_field(line, "market");
            if !TARGET_MARKETS.contains(&market.as_str()) {
                continue;
            }
            let player = text_field(line, "participant");
            if player.is_empty() {
                continue;
            }

            let home = text_field_or(line, "homeTeam", "Unknown Home");
            let away = text_field_or(line, "awayTeam", "Unknown Away");
            let selection = text_field(line, "selection");

            games
                .entry(format!("{home} @ {away}"))
                .or_default()
                .push(PropListing {
                    player,
                    market,
                    selection,
                });
        }
    }

    Ok(games)
}

fn text_field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(|x| x.as_str())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn text_field_or(v: &Value, key: &str, fallback: &str) -> String {
    let out = text_field(v, key);
    if out.is_empty() {
        fallback.to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_market_lines_are_dropped() {
        let raw = r#"[{"result":{"data":{"json":[
            {"market":"Player Shots","participant":"A","homeTeam":"H","awayTeam":"A2","selection":"Over"},
            {"market":"Player Goals","participant":"B","homeTeam":"H","awayTeam":"A2","selection":"Over"}
        ]}}}]"#;
        let games = parse_props_json(raw).expect("feed should parse");
        let listings = games.get("H @ A2").expect("matchup should exist");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].player, "B");
    }

    #[test]
    fn empty_player_lines_are_dropped() {
        let raw = r#"[{"result":{"data":{"json":[
            {"market":"Player Points","participant":"  ","homeTeam":"H","awayTeam":"A","selection":"Over"}
        ]}}}]"#;
        let games = parse_props_json(raw).expect("feed should parse");
        assert!(games.is_empty());
    }

    #[test]
    fn missing_team_labels_fall_back() {
        let raw = r#"[{"result":{"data":{"json":[
            {"market":"Player Assists","participant":"A","selection":"Over 0.5"}
        ]}}}]"#;
        let games = parse_props_json(raw).expect("feed should parse");
        assert!(games.contains_key("Unknown Home @ Unknown Away"));
    }

    #[test]
    fn null_feed_is_empty() {
        assert!(parse_props_json("null").expect("null should parse").is_empty());
        assert!(parse_props_json("").expect("empty should parse").is_empty());
    }
}
