//! Team and GenerationResult: the output of one partition.

use crate::models::player::PlayerName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generated team.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Display name derived from position ("Team 1", "Team 2", ...).
    pub name: String,
    /// Members in shuffled order. Always exactly `team_size` long.
    pub players: Vec<PlayerName>,
}

impl Team {
    pub fn new(index: usize, players: Vec<PlayerName>) -> Self {
        Self {
            name: format!("Team {}", index + 1),
            players,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Teams produced by a single generation, plus when it happened.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub teams: Vec<Team>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            generated_at: Utc::now(),
        }
    }

    /// Every assigned player, team by team.
    pub fn players(&self) -> impl Iterator<Item = &PlayerName> {
        self.teams.iter().flat_map(|t| t.players.iter())
    }
}
