//! Derived metrics: pure functions over the shape and roster size.

/// Players needed to fill every team.
pub fn total_players_needed(num_teams: u32, team_size: u32) -> usize {
    num_teams as usize * team_size as usize
}

/// Open roster slots; never negative.
pub fn players_remaining(num_teams: u32, team_size: u32, roster_size: usize) -> usize {
    total_players_needed(num_teams, team_size).saturating_sub(roster_size)
}

/// Roster fill level as a whole percentage, capped at 100.
pub fn progress_percent(roster_size: usize, total_needed: usize) -> u8 {
    if total_needed == 0 {
        return 0;
    }
    let pct = roster_size.min(total_needed) * 100 / total_needed;
    pct as u8
}
