//! TeamShape: how many teams, and how many players in each.

use crate::logic::metrics::total_players_needed;
use crate::models::generator::TeamsError;
use serde::{Deserialize, Serialize};

pub const MIN_TEAMS: u32 = 2;
pub const MAX_TEAMS: u32 = 10;
pub const MIN_TEAM_SIZE: u32 = 2;
pub const MAX_TEAM_SIZE: u32 = 11;

/// The team shape. Both fields are always inside their valid ranges:
/// every constructor and setter clamps.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTeamShape")]
pub struct TeamShape {
    num_teams: u32,
    team_size: u32,
}

/// Unchecked shape as it arrives over the wire; clamped on conversion.
#[derive(Deserialize)]
struct RawTeamShape {
    num_teams: i64,
    team_size: i64,
}

impl From<RawTeamShape> for TeamShape {
    fn from(raw: RawTeamShape) -> Self {
        Self::new(raw.num_teams, raw.team_size)
    }
}

impl Default for TeamShape {
    fn default() -> Self {
        Self {
            num_teams: MIN_TEAMS,
            team_size: MIN_TEAM_SIZE,
        }
    }
}

impl TeamShape {
    /// Build a shape, clamping each value into its range.
    pub fn new(num_teams: i64, team_size: i64) -> Self {
        Self {
            num_teams: clamp(num_teams, MIN_TEAMS, MAX_TEAMS),
            team_size: clamp(team_size, MIN_TEAM_SIZE, MAX_TEAM_SIZE),
        }
    }

    pub fn num_teams(&self) -> u32 {
        self.num_teams
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    /// Players required to fill every team.
    pub fn total_needed(&self) -> usize {
        total_players_needed(self.num_teams, self.team_size)
    }

    /// Copy of this shape with a new (clamped) team count.
    pub fn with_num_teams(self, value: i64) -> Self {
        Self {
            num_teams: clamp(value, MIN_TEAMS, MAX_TEAMS),
            ..self
        }
    }

    /// Copy of this shape with a new (clamped) team size.
    pub fn with_team_size(self, value: i64) -> Self {
        Self {
            team_size: clamp(value, MIN_TEAM_SIZE, MAX_TEAM_SIZE),
            ..self
        }
    }
}

fn clamp(value: i64, min: u32, max: u32) -> u32 {
    // Bounds are tiny, so the narrowing cast after clamping cannot truncate.
    value.clamp(i64::from(min), i64::from(max)) as u32
}

/// Parse a settings value typed by a user ("3", " 4 ", "5.0").
///
/// Fractions are truncated toward zero; range is not checked here since the
/// setters clamp. Anything that is not a finite number is rejected.
pub fn parse_setting(input: &str) -> Result<i64, TeamsError> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
        _ => Err(TeamsError::InvalidNumber(trimmed.to_string())),
    }
}
