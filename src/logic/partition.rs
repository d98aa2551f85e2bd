//! Team generation: shuffle the complete roster and cut it into teams.

use crate::models::{GenerationResult, PlayerName, Team, TeamGenerator, TeamShape, TeamsError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate teams for the generator's current roster using the thread RNG.
///
/// Requires a complete roster. On error the previous result is kept.
pub fn generate_teams(generator: &mut TeamGenerator) -> Result<(), TeamsError> {
    generate_teams_with_rng(generator, &mut rand::thread_rng())
}

/// Same as [`generate_teams`] with an explicit random source.
pub fn generate_teams_with_rng<R: Rng + ?Sized>(
    generator: &mut TeamGenerator,
    rng: &mut R,
) -> Result<(), TeamsError> {
    let teams = partition_players(generator.players(), generator.shape(), rng)?;
    log::debug!(
        "Generated {} teams of {} for generator {}",
        teams.len(),
        generator.shape().team_size(),
        generator.id()
    );
    generator.store_teams(GenerationResult::new(teams));
    Ok(())
}

/// Split `players` into `shape.num_teams()` teams of `shape.team_size()`.
///
/// 1. Check `players.len() == shape.total_needed()`; never pad or drop.
/// 2. Shuffle a copy uniformly (Fisher-Yates: from the last index down to 1,
///    swap with a uniform index in `0..=i`).
/// 3. Cut into contiguous chunks in shuffled order; chunk `k` is "Team {k+1}".
pub fn partition_players<R: Rng + ?Sized>(
    players: &[PlayerName],
    shape: TeamShape,
    rng: &mut R,
) -> Result<Vec<Team>, TeamsError> {
    let required = shape.total_needed();
    if players.len() != required {
        return Err(TeamsError::RosterIncomplete {
            required,
            current: players.len(),
        });
    }

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let teams = shuffled
        .chunks_exact(shape.team_size() as usize)
        .enumerate()
        .map(|(i, chunk)| Team::new(i, chunk.to_vec()))
        .collect();
    Ok(teams)
}
