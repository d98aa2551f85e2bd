//! Integration tests for share text, CSV export, and notices.

use team_generator_web::presentation::{
    bulk_notice, format_teams_text, notice_for_error, progress_notice, teams_to_csv,
    whatsapp_share_url, NoticeLevel,
};
use team_generator_web::{BulkAdd, PlayerName, Team, TeamsError};

fn team(index: usize, names: &[&str]) -> Team {
    Team::new(index, names.iter().filter_map(|n| PlayerName::parse(n)).collect())
}

fn sample_teams() -> Vec<Team> {
    vec![
        team(0, &["Eva Ruiz", "Ana Gomez"]),
        team(1, &["Tom Alvarez", "Luis Diaz"]),
    ]
}

#[test]
fn share_text_lists_members_under_each_team() {
    let text = format_teams_text(&sample_teams());
    assert_eq!(
        text,
        "Team 1:\nEva Ruiz\nAna Gomez\n\nTeam 2:\nTom Alvarez\nLuis Diaz"
    );
    assert_eq!(format_teams_text(&[]), "");
}

#[test]
fn whatsapp_link_encodes_the_text() {
    let url = whatsapp_share_url("Team 1:\nEva Ruiz & Ana");
    assert_eq!(url, "https://wa.me/?text=Team+1%3A%0AEva+Ruiz+%26+Ana");
}

#[test]
fn csv_has_header_and_one_row_per_member() {
    let csv = teams_to_csv(&sample_teams()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "team,player",
            "Team 1,Eva Ruiz",
            "Team 1,Ana Gomez",
            "Team 2,Tom Alvarez",
            "Team 2,Luis Diaz",
        ]
    );
}

#[test]
fn error_notices_use_expected_levels() {
    let full = notice_for_error(&TeamsError::RosterFull { capacity: 4 });
    assert_eq!(full.level, NoticeLevel::Warning);

    let missing = notice_for_error(&TeamsError::RosterIncomplete {
        required: 12,
        current: 9,
    });
    assert_eq!(missing.level, NoticeLevel::Error);
    assert_eq!(missing.message, "You need 3 more players");

    let one = notice_for_error(&TeamsError::RosterIncomplete {
        required: 4,
        current: 3,
    });
    assert_eq!(one.message, "You need 1 more player");
}

#[test]
fn progress_notices_mark_milestones() {
    let halfway = progress_notice(12, 6).unwrap();
    assert_eq!(halfway.level, NoticeLevel::Info);
    assert!(halfway.message.contains("6 players"));

    assert!(progress_notice(12, 1).unwrap().message.contains("One more"));
    assert_eq!(progress_notice(12, 0).unwrap().level, NoticeLevel::Success);
    assert!(progress_notice(12, 7).is_none());
}

#[test]
fn bulk_notice_summarizes_additions() {
    let none = BulkAdd::default();
    assert!(bulk_notice(12, 12, &none).is_none());

    let some = BulkAdd {
        added: 3,
        ..BulkAdd::default()
    };
    let added = bulk_notice(12, 9, &some).unwrap();
    assert_eq!(added.level, NoticeLevel::Success);
    assert_eq!(added.message, "Added 3 players.");

    let close = bulk_notice(12, 4, &some).unwrap();
    assert_eq!(close.level, NoticeLevel::Info);

    let done = bulk_notice(12, 0, &some).unwrap();
    assert_eq!(done.level, NoticeLevel::Success);
}
