use anyhow::Result;

use puckcorr::config::AppConfig;
use puckcorr::props;

// Feed inspection aid: print the active prop lines grouped by matchup.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    let games = props::load_props_file(&config.props_path)?;
    let mut matchups: Vec<&String> = games.keys().collect();
    matchups.sort();

    for matchup in matchups {
        println!("\n=== {matchup} ===");
        for listing in &games[matchup] {
            println!(
                "{} - {} ({})",
                listing.player, listing.market, listing.selection
            );
        }
    }
    Ok(())
}
