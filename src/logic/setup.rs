//! Roster setup helpers: pasting a list of names and loading the demo roster.

use crate::models::{PlayerName, TeamGenerator, TeamsError};
use serde::Serialize;

/// Demonstration roster used by "load example".
pub const SAMPLE_PLAYERS: [&str; 20] = [
    "Alex Torres",
    "Belén Ruiz",
    "Carlos Díaz",
    "Daniela Soto",
    "Elena Márquez",
    "Federico Ríos",
    "Gabriela Molina",
    "Hernán Vega",
    "Ivana López",
    "Julián Paredes",
    "Karina Santos",
    "Lucas Navarro",
    "Marina Castro",
    "Nicolás Álvarez",
    "Olivia Ramos",
    "Pablo Herrera",
    "Renata Flores",
    "Santiago Núñez",
    "Tamara Iglesias",
    "Valentín Luna",
];

/// What a bulk add did with each line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BulkAdd {
    pub added: usize,
    pub skipped_duplicates: usize,
    /// Valid names left over once the roster filled up.
    pub skipped_over_capacity: usize,
}

/// Add one name per line from `text`, in order, until the roster is full.
///
/// Blank lines are ignored and names already on the roster are skipped.
/// Fails without changes if no line holds a name, or if the roster is full
/// before starting.
pub fn add_players_bulk(generator: &mut TeamGenerator, text: &str) -> Result<BulkAdd, TeamsError> {
    let names: Vec<PlayerName> = text.lines().filter_map(PlayerName::parse).collect();
    if names.is_empty() {
        return Err(TeamsError::NoValidNames);
    }
    if generator.is_full() {
        return Err(TeamsError::RosterFull {
            capacity: generator.total_needed(),
        });
    }

    let mut outcome = BulkAdd::default();
    for name in names {
        match generator.push_player(name) {
            Ok(_) => outcome.added += 1,
            Err(TeamsError::DuplicatePlayer(_)) => outcome.skipped_duplicates += 1,
            Err(_) => outcome.skipped_over_capacity += 1,
        }
    }
    log::debug!(
        "Bulk add on generator {}: {:?}",
        generator.id(),
        outcome
    );
    Ok(outcome)
}

/// Replace the roster with the demo names, truncated to capacity.
pub fn load_sample_players(generator: &mut TeamGenerator) {
    generator.set_players(SAMPLE_PLAYERS);
}
