use anyhow::Result;

use puckcorr::config::AppConfig;
use puckcorr::persist;
use puckcorr::props;
use puckcorr::suggest::suggest_combos;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    let games = props::load_props_file(&config.props_path)?;
    let mut matchups: Vec<&String> = games.keys().collect();
    matchups.sort();
    println!("[INFO] Detected games in props feed: {matchups:?}");

    let scan = persist::scan_tables_dir(&config.tables_dir)?;
    for warning in &scan.warnings {
        eprintln!("[WARN] {warning}");
    }
    if scan.tables.is_empty() {
        println!(
            "[INFO] No correlation tables found in {}",
            config.tables_dir.display()
        );
        return Ok(());
    }

    let suggestions = suggest_combos(&scan.tables, &games, config.top_n);
    if suggestions.is_empty() {
        println!("No significant correlations found");
        return Ok(());
    }

    println!("\n=== Suggested player combos ===");
    for suggestion in &suggestions {
        println!(
            "{} -> {}: {:.2} ({})",
            suggestion.player, suggestion.teammate, suggestion.probability, suggestion.team
        );
    }
    Ok(())
}
