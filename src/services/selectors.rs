//! Compiled page selectors.
//!
//! Turns the string markers from `SelectorConfig` into parsed CSS selectors once,
//! so parsers never re-parse per page.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;

/// Parsed selectors plus the plain-text markers that go with them.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub team_link_cell: Selector,
    pub player_table: Selector,
    pub player_link_cell: Selector,
    pub link: Selector,
    pub currency_marker: String,
    pub name_meta: Selector,
    pub info_label: Selector,
    pub info_value: Selector,
    pub full_name_label: String,
    pub home_name_label: String,
    pub birth_date: Selector,
    pub height: Selector,
    pub nationality: Selector,
    pub club: Selector,
    pub market_value: Selector,
    pub market_value_part: Selector,
    pub position: Selector,
}

impl PageSelectors {
    /// Compile every selector, failing on the first invalid one.
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            team_link_cell: parse_selector(&config.team_link_cell)?,
            player_table: parse_selector(&config.player_table)?,
            player_link_cell: parse_selector(&config.player_link_cell)?,
            link: parse_selector(&config.link)?,
            currency_marker: config.currency_marker.clone(),
            name_meta: parse_selector(&config.name_meta)?,
            info_label: parse_selector(&config.info_label)?,
            info_value: parse_selector(&config.info_value)?,
            full_name_label: config.full_name_label.clone(),
            home_name_label: config.home_name_label.clone(),
            birth_date: parse_selector(&config.birth_date)?,
            height: parse_selector(&config.height)?,
            nationality: parse_selector(&config.nationality)?,
            club: parse_selector(&config.club)?,
            market_value: parse_selector(&config.market_value)?,
            market_value_part: parse_selector(&config.market_value_part)?,
            position: parse_selector(&config.position)?,
        })
    }
}

/// Parse a CSS selector, mapping failures into `AppError::Selector`.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("td.hauptlink").is_ok());
        assert!(parse_selector(r#"span[itemprop="height"]"#).is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_default_selectors_compile() {
        assert!(PageSelectors::compile(&SelectorConfig::default()).is_ok());
    }
}
