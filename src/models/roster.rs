// src/models/roster.rs

//! Team to players mapping produced by a run.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Club, Player};

/// Club-keyed roster, ordered by team name for stable display.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Roster {
    teams: BTreeMap<String, Vec<Player>>,
}

impl Roster {
    /// Build the roster from assembled clubs, one key per club.
    pub fn from_clubs(clubs: impl IntoIterator<Item = Club>) -> Self {
        let teams = clubs
            .into_iter()
            .map(|club| (club.name, club.players))
            .collect();
        Self { teams }
    }

    pub fn get(&self, team: &str) -> Option<&[Player]> {
        self.teams.get(team).map(Vec::as_slice)
    }

    pub fn teams(&self) -> impl Iterator<Item = (&str, &[Player])> {
        self.teams
            .iter()
            .map(|(name, players)| (name.as_str(), players.as_slice()))
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.teams.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
