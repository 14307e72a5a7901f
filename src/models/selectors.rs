// src/models/selectors.rs

//! Page markers for the league, team and player pages.

use serde::{Deserialize, Serialize};

/// CSS selectors and label strings the scraper looks for.
///
/// Defaults match the current markup of the target site. Any markup change
/// there only needs a config override, never a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// League page cell holding a team link
    pub team_link_cell: String,

    /// Squad table on a team page
    pub player_table: String,

    /// Squad table cell holding a player link
    pub player_link_cell: String,

    /// Link element inside a cell
    pub link: String,

    /// Cells whose text contains this are valuation rows, not players
    pub currency_marker: String,

    /// Page metadata carrying the player's name first
    pub name_meta: String,

    /// Label span in the info table
    pub info_label: String,

    /// Value span following a label in the info table
    pub info_value: String,

    /// Label text of the full name row
    pub full_name_label: String,

    /// Label text of the home-country name row
    pub home_name_label: String,

    pub birth_date: String,
    pub height: String,
    pub nationality: String,

    /// Header span wrapping the current club link
    pub club: String,

    /// Market value container
    pub market_value: String,

    /// Currency symbol and unit spans inside the market value container
    pub market_value_part: String,

    pub position: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            team_link_cell: "td.hauptlink.no-border-links".to_string(),
            player_table: "table.items".to_string(),
            player_link_cell: "td.hauptlink".to_string(),
            link: "a".to_string(),
            currency_marker: "€".to_string(),
            name_meta: r#"meta[name="keywords"]"#.to_string(),
            info_label: "span.info-table__content--regular".to_string(),
            info_value: "span.info-table__content--bold".to_string(),
            full_name_label: "Full name:".to_string(),
            home_name_label: "Name in home country:".to_string(),
            birth_date: r#"span.data-header__content[itemprop="birthDate"]"#.to_string(),
            height: r#"span.data-header__content[itemprop="height"]"#.to_string(),
            nationality: r#"span.data-header__content[itemprop="nationality"]"#.to_string(),
            club: r#"span.data-header__club[itemprop="affiliation"]"#.to_string(),
            market_value: "a.data-header__market-value-wrapper".to_string(),
            market_value_part: "span.waehrung".to_string(),
            position: "dd.detail-position__position".to_string(),
        }
    }
}
