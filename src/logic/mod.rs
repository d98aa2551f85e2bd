//! Team generator operations: roster setup, team generation, derived metrics.

pub mod metrics;
mod partition;
mod setup;

pub use metrics::{players_remaining, progress_percent, total_players_needed};
pub use partition::{generate_teams, generate_teams_with_rng, partition_players};
pub use setup::{add_players_bulk, load_sample_players, BulkAdd, SAMPLE_PLAYERS};
