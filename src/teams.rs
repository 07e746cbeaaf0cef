/// Team configs from the NHL API: display name, roster/schedule abbreviation,
/// and the numeric id play-by-play events are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamConfig {
    pub name: &'static str,
    pub abbr: &'static str,
    pub id: u32,
}

pub const TEAMS: [TeamConfig; 32] = [
    TeamConfig { name: "New Jersey Devils", abbr: "NJD", id: 1 },
    TeamConfig { name: "New York Islanders", abbr: "NYI", id: 2 },
    TeamConfig { name: "New York Rangers", abbr: "NYR", id: 3 },
    TeamConfig { name: "Philadelphia Flyers", abbr: "PHI", id: 4 },
    TeamConfig { name: "Pittsburgh Penguins", abbr: "PIT", id: 5 },
    TeamConfig { name: "Boston Bruins", abbr: "BOS", id: 6 },
    TeamConfig { name: "Buffalo Sabres", abbr: "BUF", id: 7 },
    TeamConfig { name: "Montreal Canadiens", abbr: "MTL", id: 8 },
    TeamConfig { name: "Ottawa Senators", abbr: "OTT", id: 9 },
    TeamConfig { name: "Toronto Maple Leafs", abbr: "TOR", id: 10 },
    TeamConfig { name: "Carolina Hurricanes", abbr: "CAR", id: 12 },
    TeamConfig { name: "Florida Panthers", abbr: "FLA", id: 13 },
    TeamConfig { name: "Tampa Bay Lightning", abbr: "TBL", id: 14 },
    TeamConfig { name: "Washington Capitals", abbr: "WSH", id: 15 },
    TeamConfig { name: "Chicago Blackhawks", abbr: "CHI", id: 16 },
    TeamConfig { name: "Detroit Red Wings", abbr: "DET", id: 17 },
    TeamConfig { name: "Nashville Predators", abbr: "NSH", id: 18 },
    TeamConfig { name: "St. Louis Blues", abbr: "STL", id: 19 },
    TeamConfig { name: "Calgary Flames", abbr: "CGY", id: 20 },
    TeamConfig { name: "Colorado Avalanche", abbr: "COL", id: 21 },
    TeamConfig { name: "Edmonton Oilers", abbr: "EDM", id: 22 },
    TeamConfig { name: "Vancouver Canucks", abbr: "VAN", id: 23 },
    TeamConfig { name: "Anaheim Ducks", abbr: "ANA", id: 24 },
    TeamConfig { name: "Dallas Stars", abbr: "DAL", id: 25 },
    TeamConfig { name: "Los Angeles Kings", abbr: "LAK", id: 26 },
    TeamConfig { name: "San Jose Sharks", abbr: "SJS", id: 28 },
    TeamConfig { name: "Columbus Blue Jackets", abbr: "CBJ", id: 29 },
    TeamConfig { name: "Minnesota Wild", abbr: "MIN", id: 30 },
    TeamConfig { name: "Winnipeg Jets", abbr: "WPG", id: 52 },
    TeamConfig { name: "Vegas Golden Knights", abbr: "VGK", id: 54 },
    TeamConfig { name: "Seattle Kraken", abbr: "SEA", id: 55 },
    TeamConfig { name: "Utah Mammoth", abbr: "UTA", id: 68 },
];

pub fn team_by_abbr(abbr: &str) -> Option<&'static TeamConfig> {
    TEAMS.iter().find(|team| team.abbr == abbr)
}

/// Extract the team abbreviation from a persisted table file name such as
/// `EDM_assist_point_same_goal_20252026.csv`. The code is everything before
/// the first underscore and must be all uppercase ASCII.
pub fn abbr_from_table_file_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(".csv")?;
    let (abbr, _) = stem.split_once('_')?;
    if abbr.is_empty() || !abbr.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    Some(abbr)
}

/// Props feeds carry free-text matchup labels ("Home Team @ Away Team") while
/// tables are keyed by abbreviation, so substring containment of the full
/// display name is the only association mechanism available. Exact match, no
/// normalization.
pub fn matchup_mentions_team(matchup: &str, team_name: &str) -> bool {
    !team_name.is_empty() && matchup.contains(team_name)
}
