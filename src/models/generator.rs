//! TeamGenerator: shape, roster, and the last generated teams.

use crate::logic::metrics::players_remaining;
use crate::models::player::PlayerName;
use crate::models::shape::TeamShape;
use crate::models::team::GenerationResult;
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Outcomes that reject an operation. Prior state is always left unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TeamsError {
    /// A settings value was not a number.
    InvalidNumber(String),
    /// The name is empty once whitespace is stripped.
    EmptyName,
    /// Bulk input held no usable name at all.
    NoValidNames,
    /// The roster already holds `capacity` players.
    RosterFull { capacity: usize },
    /// The player is already on the roster.
    DuplicatePlayer(PlayerName),
    /// Teams can only be generated from a complete roster.
    RosterIncomplete { required: usize, current: usize },
}

impl TeamsError {
    /// Stable machine-readable code, for clients that localize messages.
    pub fn code(&self) -> &'static str {
        match self {
            TeamsError::InvalidNumber(_) => "invalid_number",
            TeamsError::EmptyName => "empty_name",
            TeamsError::NoValidNames => "no_valid_names",
            TeamsError::RosterFull { .. } => "roster_full",
            TeamsError::DuplicatePlayer(_) => "duplicate_player",
            TeamsError::RosterIncomplete { .. } => "roster_incomplete",
        }
    }
}

impl std::fmt::Display for TeamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamsError::InvalidNumber(s) => write!(f, "Not a number: {:?}", s),
            TeamsError::EmptyName => write!(f, "Player name is empty"),
            TeamsError::NoValidNames => write!(f, "No valid player names"),
            TeamsError::RosterFull { capacity } => {
                write!(f, "Roster is full ({} players)", capacity)
            }
            TeamsError::DuplicatePlayer(name) => write!(f, "{} is already on the roster", name),
            TeamsError::RosterIncomplete { required, current } => {
                write!(f, "Roster has {} of {} players", current, required)
            }
        }
    }
}

impl std::error::Error for TeamsError {}

/// Unique identifier for a generator (one per browser session).
pub type GeneratorId = Uuid;

/// All state for one team draw: settings, roster, and the current result.
///
/// Invariant: `players.len() <= shape.total_needed()` and `players` holds no
/// duplicates.
#[derive(Clone, Debug, Serialize)]
pub struct TeamGenerator {
    id: GeneratorId,
    shape: TeamShape,
    players: Vec<PlayerName>,
    teams: Option<GenerationResult>,
}

impl Default for TeamGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamGenerator {
    /// New generator with the default 2x2 shape and an empty roster.
    pub fn new() -> Self {
        Self::with_shape(TeamShape::default())
    }

    pub fn with_shape(shape: TeamShape) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape,
            players: Vec::new(),
            teams: None,
        }
    }

    pub fn id(&self) -> GeneratorId {
        self.id
    }

    pub fn shape(&self) -> TeamShape {
        self.shape
    }

    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub fn teams(&self) -> Option<&GenerationResult> {
        self.teams.as_ref()
    }

    pub fn total_needed(&self) -> usize {
        self.shape.total_needed()
    }

    pub fn players_remaining(&self) -> usize {
        players_remaining(
            self.shape.num_teams(),
            self.shape.team_size(),
            self.players.len(),
        )
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.total_needed()
    }

    pub fn contains(&self, name: &PlayerName) -> bool {
        self.players.contains(name)
    }

    /// Change the team count (clamped to range). See [`Self::set_shape`].
    pub fn set_num_teams(&mut self, value: i64) {
        self.set_shape(self.shape.with_num_teams(value));
    }

    /// Change the team size (clamped to range). See [`Self::set_shape`].
    pub fn set_team_size(&mut self, value: i64) {
        self.set_shape(self.shape.with_team_size(value));
    }

    /// Replace the shape. If it actually changes, the current teams are
    /// discarded and the roster is pruned to the new capacity, keeping the
    /// earliest additions.
    pub fn set_shape(&mut self, shape: TeamShape) {
        if shape == self.shape {
            return;
        }
        self.shape = shape;
        self.teams = None;
        let capacity = shape.total_needed();
        if self.players.len() > capacity {
            log::debug!(
                "Pruning roster from {} to {} players after shape change",
                self.players.len(),
                capacity
            );
            self.players.truncate(capacity);
        }
    }

    /// Add a player by raw name. The name is normalized before any check.
    pub fn add_player(&mut self, raw: &str) -> Result<PlayerName, TeamsError> {
        let name = PlayerName::parse(raw).ok_or(TeamsError::EmptyName)?;
        self.push_player(name)
    }

    /// Append an already-normalized name, enforcing capacity and uniqueness.
    pub(crate) fn push_player(&mut self, name: PlayerName) -> Result<PlayerName, TeamsError> {
        if self.is_full() {
            return Err(TeamsError::RosterFull {
                capacity: self.total_needed(),
            });
        }
        if self.contains(&name) {
            return Err(TeamsError::DuplicatePlayer(name));
        }
        self.players.push(name.clone());
        Ok(name)
    }

    /// Remove a player by raw name (normalized before matching). Returns
    /// whether anyone was removed.
    pub fn remove_player(&mut self, raw: &str) -> bool {
        let Some(name) = PlayerName::parse(raw) else {
            return false;
        };
        match self.players.iter().position(|p| *p == name) {
            Some(idx) => {
                self.players.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace the roster wholesale: normalized, first occurrence wins, empty
    /// names dropped, truncated to capacity. Discards current teams.
    pub fn set_players<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let capacity = self.total_needed();
        let mut seen = HashSet::new();
        let players: Vec<PlayerName> = names
            .into_iter()
            .filter_map(|raw| PlayerName::parse(raw.as_ref()))
            .filter(|name| seen.insert(name.clone()))
            .take(capacity)
            .collect();
        self.players = players;
        self.teams = None;
    }

    /// Empty the roster. Discards current teams.
    pub fn clear_roster(&mut self) {
        self.players.clear();
        self.teams = None;
    }

    /// Discard the current teams; roster and shape are untouched.
    pub fn clear_teams(&mut self) {
        self.teams = None;
    }

    /// Back to defaults: 2x2 shape, empty roster, no teams. Keeps the id.
    pub fn reset(&mut self) {
        *self = Self {
            id: self.id,
            ..Self::new()
        };
    }

    pub(crate) fn store_teams(&mut self, result: GenerationResult) {
        self.teams = Some(result);
    }
}
