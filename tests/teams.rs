//! Integration tests for team generation: shape, coverage, preconditions, randomness.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use team_generator_web::{
    generate_teams, generate_teams_with_rng, partition_players, PlayerName, Team, TeamGenerator,
    TeamShape, TeamsError,
};

const FOUR: [&str; 4] = ["Ana Gomez", "Luis Diaz", "Eva Ruiz", "Tom Alvarez"];

fn full_generator(num_teams: i64, team_size: i64) -> TeamGenerator {
    let mut g = TeamGenerator::with_shape(TeamShape::new(num_teams, team_size));
    let names: Vec<String> = (1..=g.total_needed()).map(|i| format!("Player {}", i)).collect();
    g.set_players(&names);
    assert!(g.is_full());
    g
}

fn assert_exact_cover(teams: &[Team], roster: &[PlayerName], team_size: usize) {
    let assigned: Vec<&PlayerName> = teams.iter().flat_map(|t| t.players.iter()).collect();
    assert_eq!(assigned.len(), roster.len());
    let unique: HashSet<&PlayerName> = assigned.iter().copied().collect();
    assert_eq!(unique.len(), roster.len(), "a player was assigned twice");
    let expected: HashSet<&PlayerName> = roster.iter().collect();
    assert_eq!(unique, expected);
    for team in teams {
        assert_eq!(team.len(), team_size);
    }
}

#[test]
fn twelve_players_make_three_teams_of_four() {
    let mut g = full_generator(3, 4);
    generate_teams(&mut g).unwrap();
    let result = g.teams().unwrap();
    assert_eq!(result.teams.len(), 3);
    assert_exact_cover(&result.teams, g.players(), 4);
    let team_names: Vec<&str> = result.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(team_names, ["Team 1", "Team 2", "Team 3"]);
}

#[test]
fn four_named_players_make_two_pairs() {
    let mut g = TeamGenerator::new();
    for name in FOUR {
        g.add_player(name).unwrap();
    }
    generate_teams(&mut g).unwrap();
    let result = g.teams().unwrap();
    assert_eq!(result.teams.len(), 2);
    assert_exact_cover(&result.teams, g.players(), 2);
    assert_eq!(result.players().count(), 4);
}

#[test]
fn every_shape_covers_the_roster_exactly() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for num_teams in 2..=10 {
        for team_size in 2..=11 {
            let mut g = full_generator(num_teams, team_size);
            generate_teams_with_rng(&mut g, &mut rng).unwrap();
            let teams = &g.teams().unwrap().teams;
            assert_eq!(teams.len(), num_teams as usize);
            assert_exact_cover(teams, g.players(), team_size as usize);
        }
    }
}

#[test]
fn incomplete_roster_is_refused() {
    let mut g = TeamGenerator::with_shape(TeamShape::new(3, 4));
    g.set_players(["a", "b", "c"]);
    assert_eq!(
        generate_teams(&mut g),
        Err(TeamsError::RosterIncomplete {
            required: 12,
            current: 3,
        })
    );
    assert!(g.teams().is_none());
}

#[test]
fn refused_generation_keeps_previous_teams() {
    let mut g = TeamGenerator::new();
    g.set_players(FOUR);
    generate_teams(&mut g).unwrap();
    let before = g.teams().cloned();

    assert!(g.remove_player("Eva Ruiz"));
    assert!(matches!(
        generate_teams(&mut g),
        Err(TeamsError::RosterIncomplete { required: 4, current: 3 })
    ));
    assert_eq!(g.teams().cloned(), before);
}

#[test]
fn partition_rejects_oversized_roster() {
    let roster: Vec<PlayerName> = ["a", "b", "c", "d", "e"]
        .iter()
        .filter_map(|n| PlayerName::parse(n))
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        partition_players(&roster, TeamShape::default(), &mut rng),
        Err(TeamsError::RosterIncomplete { required: 4, current: 5 })
    ));
}

#[test]
fn clear_teams_keeps_roster_and_allows_regenerating() {
    let mut g = full_generator(2, 3);
    let roster = g.players().to_vec();
    generate_teams(&mut g).unwrap();
    g.clear_teams();
    assert!(g.teams().is_none());
    assert_eq!(g.players(), roster.as_slice());
    generate_teams(&mut g).unwrap();
    assert!(g.teams().is_some());
}

#[test]
fn changing_shape_or_roster_discards_teams() {
    let mut g = full_generator(2, 2);
    generate_teams(&mut g).unwrap();
    g.set_num_teams(2);
    assert!(g.teams().is_some(), "unchanged shape keeps teams");
    g.set_team_size(3);
    assert!(g.teams().is_none());

    let mut g = full_generator(2, 2);
    generate_teams(&mut g).unwrap();
    g.set_players(FOUR);
    assert!(g.teams().is_none());

    let mut g = full_generator(2, 2);
    generate_teams(&mut g).unwrap();
    g.clear_roster();
    assert!(g.teams().is_none());
}

#[test]
fn same_seed_gives_same_teams() {
    let mut a = full_generator(3, 4);
    let mut b = a.clone();
    generate_teams_with_rng(&mut a, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    generate_teams_with_rng(&mut b, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    assert_eq!(a.teams().unwrap().teams, b.teams().unwrap().teams);
}

#[test]
fn repeated_generation_varies_but_stays_valid() {
    let mut g = full_generator(3, 4);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..20 {
        generate_teams_with_rng(&mut g, &mut rng).unwrap();
        let teams = g.teams().unwrap().teams.clone();
        assert_exact_cover(&teams, g.players(), 4);
        seen.insert(teams);
    }
    assert!(seen.len() > 1, "20 draws of 12 players were all identical");
}

#[test]
fn shuffle_is_uniform_over_orderings() {
    let roster: Vec<PlayerName> = FOUR.iter().filter_map(|n| PlayerName::parse(n)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let draws = 24_000;
    let mut counts: HashMap<Vec<PlayerName>, usize> = HashMap::new();
    for _ in 0..draws {
        let teams = partition_players(&roster, TeamShape::default(), &mut rng).unwrap();
        let order: Vec<PlayerName> = teams.into_iter().flat_map(|t| t.players).collect();
        *counts.entry(order).or_default() += 1;
    }
    // 4! orderings, about 1000 each; standard deviation is about 31.
    assert_eq!(counts.len(), 24);
    for (order, count) in &counts {
        assert!((800..=1200).contains(count), "{:?} drawn {} times", order, count);
    }
}
