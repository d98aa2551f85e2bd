//! Random team generator: library with models, operations, and presentation helpers.

pub mod logic;
pub mod models;
pub mod presentation;

pub use logic::{
    add_players_bulk, generate_teams, generate_teams_with_rng, load_sample_players,
    partition_players, players_remaining, progress_percent, total_players_needed, BulkAdd,
    SAMPLE_PLAYERS,
};
pub use models::{
    parse_setting, GenerationResult, GeneratorId, PlayerName, Team, TeamGenerator, TeamShape,
    TeamsError, MAX_TEAMS, MAX_TEAM_SIZE, MIN_TEAMS, MIN_TEAM_SIZE,
};
