use std::collections::{HashMap, HashSet};

use anyhow::Result;

/// One scoring play for the team under analysis, from a completed game.
///
/// Identities are display names where the roster map resolved them, otherwise
/// the raw numeric id rendered as text; the table is agnostic to which, as
/// long as one identity space is used consistently. Absent credit is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalEvent {
    pub game_id: u64,
    pub date: String,
    pub scorer: Option<String>,
    pub assist1: Option<String>,
    pub assist2: Option<String>,
}

impl GoalEvent {
    /// True when `player` registered a point on this goal (scorer or either
    /// assist).
    pub fn credited(&self, player: &str) -> bool {
        self.scorer.as_deref() == Some(player)
            || self.assist1.as_deref() == Some(player)
            || self.assist2.as_deref() == Some(player)
    }

    fn assisted_by(&self, player: &str) -> bool {
        self.assist1.as_deref() == Some(player) || self.assist2.as_deref() == Some(player)
    }
}

/// Per-team co-occurrence table.
///
/// One row per player with at least one assist, one column per player with at
/// least one point. Cell (a, p) is the fraction of a's assisted goals on
/// which p also earned credit, so every cell lies in [0, 1] and the diagonal
/// is forced to zero. Rows do not generally sum to 1: a single goal credits
/// up to three players at once.
///
/// Row and column order is first appearance in the event sequence, which
/// makes building a pure function of its input and lets the persisted CSV
/// round-trip exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTable {
    assisters: Vec<String>,
    players: Vec<String>,
    values: Vec<Vec<f64>>,
    row_index: HashMap<String, usize>,
    col_index: HashMap<String, usize>,
}

impl CorrelationTable {
    pub fn build(events: &[GoalEvent]) -> Self {
        let mut assisters: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for event in events {
            for name in [event.assist1.as_deref(), event.assist2.as_deref()]
                .into_iter()
                .flatten()
            {
                if !name.is_empty() && seen.insert(name) {
                    assisters.push(name.to_string());
                }
            }
        }

        let mut players: Vec<String> = Vec::new();
        seen.clear();
        for event in events {
            for name in [
                event.scorer.as_deref(),
                event.assist1.as_deref(),
                event.assist2.as_deref(),
            ]
            .into_iter()
            .flatten()
            {
                if !name.is_empty() && seen.insert(name) {
                    players.push(name.to_string());
                }
            }
        }

        let mut values = vec![vec![0.0; players.len()]; assisters.len()];
        for (row, assister) in assisters.iter().enumerate() {
            let assisted: Vec<&GoalEvent> =
                events.iter().filter(|e| e.assisted_by(assister)).collect();
            // Unreachable via row-set construction, but a zero-assist row is
            // defined as all-zero rather than undefined.
            if assisted.is_empty() {
                continue;
            }
            let n = assisted.len() as f64;
            for (col, player) in players.iter().enumerate() {
                let count = assisted.iter().filter(|e| e.credited(player)).count();
                values[row][col] = count as f64 / n;
            }
        }

        let table = Self::index(assisters, players, values);
        table.zeroed_diagonal()
    }

    /// Reassemble a table from persisted parts. Used by the CSV loader; the
    /// diagonal is re-forced so a hand-edited file cannot break the
    /// self-pairing invariant.
    pub fn from_parts(
        assisters: Vec<String>,
        players: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if values.len() != assisters.len() {
            anyhow::bail!(
                "value rows ({}) do not match row labels ({})",
                values.len(),
                assisters.len()
            );
        }
        if let Some(bad) = values.iter().find(|row| row.len() != players.len()) {
            anyhow::bail!(
                "value row width ({}) does not match column labels ({})",
                bad.len(),
                players.len()
            );
        }
        Ok(Self::index(assisters, players, values).zeroed_diagonal())
    }

    fn index(assisters: Vec<String>, players: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        let row_index = assisters
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        let col_index = players
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self {
            assisters,
            players,
            values,
            row_index,
            col_index,
        }
    }

    // Suggesting a player paired with themselves is never valid.
    fn zeroed_diagonal(mut self) -> Self {
        for (row, assister) in self.assisters.iter().enumerate() {
            if let Some(&col) = self.col_index.get(assister) {
                self.values[row][col] = 0.0;
            }
        }
        self
    }

    /// Row labels (players with at least one assist), table order.
    pub fn rows(&self) -> &[String] {
        &self.assisters
    }

    /// Column labels (players with at least one point), table order.
    pub fn columns(&self) -> &[String] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.assisters.is_empty() && self.players.is_empty()
    }

    pub fn has_row(&self, assister: &str) -> bool {
        self.row_index.contains_key(assister)
    }

    pub fn cell(&self, assister: &str, player: &str) -> Option<f64> {
        let row = *self.row_index.get(assister)?;
        let col = *self.col_index.get(player)?;
        Some(self.values[row][col])
    }

    /// One row's (column label, value) pairs in table order, or `None` when
    /// the player has no assist row.
    pub fn row_pairs(&self, assister: &str) -> Option<impl Iterator<Item = (&str, f64)>> {
        let row = *self.row_index.get(assister)?;
        Some(
            self.players
                .iter()
                .map(String::as_str)
                .zip(self.values[row].iter().copied()),
        )
    }

    pub fn row_values(&self, assister: &str) -> Option<&[f64]> {
        let row = *self.row_index.get(assister)?;
        Some(&self.values[row])
    }
}
