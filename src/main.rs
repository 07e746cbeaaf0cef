use anyhow::Result;

use puckcorr::config::AppConfig;
use puckcorr::correlation::CorrelationTable;
use puckcorr::nhl_fetch;
use puckcorr::persist;
use puckcorr::teams::{TeamConfig, TEAMS};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    println!(
        "[INFO] Building correlation tables for season {} into {}",
        config.season,
        config.tables_dir.display()
    );

    for team in &TEAMS {
        println!("\n[INFO] Processing {} ({})", team.name, team.abbr);
        if let Err(err) = process_team(team, &config) {
            eprintln!("[WARN] {} skipped: {err:#}", team.name);
        }
    }

    Ok(())
}

fn process_team(team: &TeamConfig, config: &AppConfig) -> Result<()> {
    let names = nhl_fetch::fetch_team_roster(team.abbr, &config.season)?;
    println!("[INFO] Loaded {} {} players", names.len(), team.name);

    let games = nhl_fetch::fetch_completed_games(team.abbr, &config.season)?;
    if games.is_empty() {
        println!("[INFO] No completed games for {}", team.name);
        return Ok(());
    }
    println!("[INFO] Found {} completed games for {}", games.len(), team.name);

    let (events, warnings) = nhl_fetch::fetch_team_goal_events(team.id, &games, &names);
    for warning in &warnings {
        eprintln!("[WARN] {warning}");
    }
    if events.is_empty() {
        println!("[INFO] No {} goal data", team.name);
        return Ok(());
    }

    let table = CorrelationTable::build(&events);
    let path = persist::save_table(&config.tables_dir, team.abbr, &config.season, &table)?;
    println!("[INFO] Saved {}", path.display());
    Ok(())
}
