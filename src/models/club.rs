// src/models/club.rs

//! Club data structure and player assignment.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{FilterConfig, Player};

/// A club keyed by its scraped name, owning its players.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Club {
    pub name: String,
    pub players: Vec<Player>,
}

impl Club {
    /// Create an empty club.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Collect the distinct team names that may key a club.
///
/// Players without a team field and names rejected by the filter are skipped.
pub fn team_names_from<'a>(
    players: impl IntoIterator<Item = &'a Player>,
    filter: &FilterConfig,
) -> BTreeSet<String> {
    players
        .into_iter()
        .filter_map(|player| player.team.as_deref())
        .filter(|team| filter.accepts(team))
        .map(str::to_string)
        .collect()
}

/// Create one empty club per team name.
pub fn create_clubs<I, S>(names: I) -> Vec<Club>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Club::new).collect()
}

/// Append a player to the club whose name equals the player's team field.
///
/// Returns `false` when no club matches; the player is dropped in that case.
pub fn assign(player: Player, clubs: &mut [Club]) -> bool {
    let Some(team) = player.team.as_deref() else {
        return false;
    };

    match clubs.iter_mut().find(|club| club.name == team) {
        Some(club) => {
            club.add_player(player);
            true
        }
        None => false,
    }
}
