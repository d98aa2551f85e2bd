//! Presentation adapters: turn generator state and outcome codes into text
//! for people (share text, CSV, notices). Nothing in `models` or `logic`
//! depends on this module.

mod notices;
mod share;

pub use notices::{bulk_notice, notice_for_error, progress_notice, Notice, NoticeLevel};
pub use share::{format_teams_text, teams_to_csv, whatsapp_share_url};
