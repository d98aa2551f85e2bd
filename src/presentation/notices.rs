//! User-facing notices for operation outcomes.

use crate::logic::BulkAdd;
use crate::models::TeamsError;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A short message for a toast/banner.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

pub fn notice_for_error(err: &TeamsError) -> Notice {
    use NoticeLevel::*;
    match err {
        TeamsError::InvalidNumber(_) => Notice::new(Error, "Please enter a number"),
        TeamsError::EmptyName => Notice::new(Error, "Please enter a valid name"),
        TeamsError::NoValidNames => Notice::new(Error, "No valid names found"),
        TeamsError::RosterFull { .. } => Notice::new(Warning, "The player limit has been reached"),
        TeamsError::DuplicatePlayer(_) => Notice::new(Warning, "This player is already on the list"),
        TeamsError::RosterIncomplete { required, current } => {
            let missing = required.saturating_sub(*current);
            Notice::new(Error, format!("You need {} more {}", missing, players_word(missing)))
        }
    }
}

/// Milestone notice after a single add: halfway, one left, or complete.
pub fn progress_notice(total_needed: usize, remaining: usize) -> Option<Notice> {
    if remaining == total_needed / 2 {
        Some(Notice::new(
            NoticeLevel::Info,
            format!("Halfway there. {} {} to go.", remaining, players_word(remaining)),
        ))
    } else if remaining == 1 {
        Some(Notice::new(NoticeLevel::Info, "One more player to complete the list."))
    } else if remaining == 0 {
        Some(Notice::new(NoticeLevel::Success, complete_message()))
    } else {
        None
    }
}

/// Summary after a bulk paste. `None` when nothing was added.
pub fn bulk_notice(total_needed: usize, remaining: usize, outcome: &BulkAdd) -> Option<Notice> {
    if outcome.added == 0 {
        return None;
    }
    let notice = if remaining == 0 {
        Notice::new(NoticeLevel::Success, complete_message())
    } else if remaining <= total_needed / 2 {
        Notice::new(
            NoticeLevel::Info,
            format!("Good progress. Only {} {} left.", remaining, players_word(remaining)),
        )
    } else {
        Notice::new(
            NoticeLevel::Success,
            format!("Added {} {}.", outcome.added, players_word(outcome.added)),
        )
    };
    Some(notice)
}

fn complete_message() -> &'static str {
    "The list is complete. You can generate the teams now."
}

fn players_word(n: usize) -> &'static str {
    if n == 1 {
        "player"
    } else {
        "players"
    }
}
