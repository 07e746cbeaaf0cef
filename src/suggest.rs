use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::correlation::CorrelationTable;
use crate::props::PropListing;
use crate::teams::matchup_mentions_team;

/// One ranked output: bet `player` together with `teammate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub team: String,
    pub player: String,
    pub teammate: String,
    pub probability: f64,
}

/// Join prop listings against the per-team correlation tables and rank
/// candidate pairs across all teams, highest probability first.
///
/// `tables` is keyed by full team display name; a team participates in a
/// matchup when its name appears inside the matchup label. Players with a
/// prop but no table row contribute nothing, as do rows whose top entries
/// are all zero. An empty result means no significant correlations were
/// found, not an error.
pub fn suggest_combos(
    tables: &HashMap<String, CorrelationTable>,
    props_by_matchup: &HashMap<String, Vec<PropListing>>,
    top_n: usize,
) -> Vec<Suggestion> {
    let mut team_names: Vec<&String> = tables.keys().collect();
    team_names.sort();

    let mut out = Vec::new();
    for team_name in team_names {
        out.extend(suggest_for_team(
            team_name,
            &tables[team_name],
            props_by_matchup,
            top_n,
        ));
    }
    out.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    out
}

pub fn suggest_for_team(
    team_name: &str,
    table: &CorrelationTable,
    props_by_matchup: &HashMap<String, Vec<PropListing>>,
    top_n: usize,
) -> Vec<Suggestion> {
    let mut matchups: Vec<&String> = props_by_matchup
        .keys()
        .filter(|matchup| matchup_mentions_team(matchup, team_name))
        .collect();
    matchups.sort();

    // Candidate anchors: every propped player in this team's matchups, once.
    let mut anchors: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for matchup in matchups {
        for listing in &props_by_matchup[matchup] {
            let player = listing.player.as_str();
            if seen.insert(player) {
                anchors.push(player);
            }
        }
    }

    let mut out = Vec::new();
    for anchor in anchors {
        // Propped players absent from the table are silently excluded; the
        // two sources cover different player sets by nature.
        let Some(pairs) = table.row_pairs(anchor) else {
            continue;
        };
        let mut pairs: Vec<(&str, f64)> = pairs
            .filter(|(teammate, _)| *teammate != anchor)
            .collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        for (teammate, probability) in pairs.into_iter().take(top_n) {
            if probability > 0.0 {
                out.push(Suggestion {
                    team: team_name.to_string(),
                    player: anchor.to_string(),
                    teammate: teammate.to_string(),
                    probability,
                });
            }
        }
    }
    out
}
