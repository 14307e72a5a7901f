//! Player data structure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown for a field the page did not carry.
const ABSENT: &str = "-";

/// Default display template.
pub const DEFAULT_TEMPLATE: &str = "{name} | age {age} | {height} | {nationality} | \
                                    {position} | {market_value}";

/// A player scraped from a detail page.
///
/// Every field is optional: any lookup can miss on a page, and a record with
/// nothing filled in is still a legal scrape result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,

    /// Club name as printed in the player page header
    pub team: Option<String>,

    /// Formatted value such as `€50m`
    pub market_value: Option<String>,

    pub position: Option<String>,
    pub nationality: Option<String>,
}

impl Player {
    /// Format player for display using a template.
    ///
    /// Supported placeholders:
    /// - `{name}`, `{age}`, `{height}`, `{team}`
    /// - `{market_value}`, `{position}`, `{nationality}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{name}", field(&self.name))
            .replace("{age}", field(&self.age))
            .replace("{height}", field(&self.height))
            .replace("{team}", field(&self.team))
            .replace("{market_value}", field(&self.market_value))
            .replace("{position}", field(&self.position))
            .replace("{nationality}", field(&self.nationality))
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(ABSENT)
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_TEMPLATE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        Player {
            name: Some("Bukayo Saka".to_string()),
            age: Some("22".to_string()),
            height: Some("1,78 m".to_string()),
            team: Some("Arsenal FC".to_string()),
            market_value: Some("€140.00m".to_string()),
            position: Some("Right Winger".to_string()),
            nationality: None,
        }
    }

    #[test]
    fn test_format() {
        let player = sample_player();
        assert_eq!(
            player.format("[{team}] {name} ({age})"),
            "[Arsenal FC] Bukayo Saka (22)"
        );
    }

    #[test]
    fn test_display_marks_absent_fields() {
        let player = sample_player();
        let shown = player.to_string();
        assert!(shown.starts_with("Bukayo Saka | age 22"));
        assert!(shown.contains("| - |"));
    }

    #[test]
    fn test_empty_player_is_legal() {
        let player = Player::default();
        assert_eq!(player.format("{name}/{team}"), "-/-");
    }
}
