//! Shareable renderings of generated teams.

use crate::models::Team;
use url::form_urlencoded;

/// Plain text for clipboard/messaging: each team as `"{name}:"` followed by
/// one member per line, teams separated by a blank line.
pub fn format_teams_text(teams: &[Team]) -> String {
    teams
        .iter()
        .map(|team| {
            let mut block = format!("{}:", team.name);
            for player in &team.players {
                block.push('\n');
                block.push_str(player.as_str());
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// WhatsApp "click to chat" link prefilled with `text`.
pub fn whatsapp_share_url(text: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("https://wa.me/?text={}", encoded)
}

/// CSV with a `team,player` header and one row per member.
pub fn teams_to_csv(teams: &[Team]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["team", "player"])?;
    for team in teams {
        for player in &team.players {
            writer.write_record([team.name.as_str(), player.as_str()])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    // Every field written above is valid UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
