//! Data structures for the team generator: names, shape, roster state, teams.

mod generator;
mod player;
mod shape;
mod team;

pub use generator::{GeneratorId, TeamGenerator, TeamsError};
pub use player::PlayerName;
pub use shape::{
    parse_setting, TeamShape, MAX_TEAMS, MAX_TEAM_SIZE, MIN_TEAMS, MIN_TEAM_SIZE,
};
pub use team::{GenerationResult, Team};
