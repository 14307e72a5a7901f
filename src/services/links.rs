// src/services/links.rs

//! Link discovery on league and team pages.

use std::sync::Arc;

use scraper::{ElementRef, Html};
use url::Url;

use crate::services::PageSelectors;
use crate::utils::{resolve_url, stripped_text};

/// Finds team links on the league index and player links on team pages.
#[derive(Debug, Clone)]
pub struct LinkDiscoverer {
    selectors: Arc<PageSelectors>,
    base: Url,
}

impl LinkDiscoverer {
    /// Create a discoverer resolving relative links against `base`.
    pub fn new(selectors: Arc<PageSelectors>, base: Url) -> Self {
        Self { selectors, base }
    }

    /// Team page URLs in page order.
    ///
    /// Takes the first link inside every team cell. A page without team cells
    /// yields an empty list.
    pub fn team_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.selectors.team_link_cell)
            .filter_map(|cell| self.first_link(cell))
            .collect()
    }

    /// Player page URLs in page order.
    ///
    /// Only cells of the squad table count. Cells whose text carries the currency
    /// marker are valuation rows and are skipped even when they hold a link.
    pub fn player_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let Some(table) = document.select(&self.selectors.player_table).next() else {
            return Vec::new();
        };

        table
            .select(&self.selectors.player_link_cell)
            .filter(|cell| !stripped_text(*cell).contains(&self.selectors.currency_marker))
            .filter_map(|cell| self.first_link(cell))
            .collect()
    }

    fn first_link(&self, cell: ElementRef<'_>) -> Option<String> {
        let href = cell.select(&self.selectors.link).next()?.value().attr("href")?;
        Some(resolve_url(&self.base, href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectorConfig;

    fn discoverer() -> LinkDiscoverer {
        let selectors = PageSelectors::compile(&SelectorConfig::default()).unwrap();
        LinkDiscoverer::new(
            Arc::new(selectors),
            Url::parse("https://www.transfermarkt.co.uk").unwrap(),
        )
    }

    const LEAGUE_PAGE: &str = r#"
        <html><body><table>
          <tr><td class="hauptlink no-border-links"><a href="/arsenal-fc/startseite/verein/11">Arsenal</a></td></tr>
          <tr><td class="hauptlink no-border-links"><a href="/fc-chelsea/startseite/verein/631">Chelsea</a></td></tr>
          <tr><td class="hauptlink"><a href="/not-a-team">Other</a></td></tr>
          <tr><td class="hauptlink no-border-links">No link</td></tr>
        </table></body></html>
    "#;

    #[test]
    fn team_links_resolve_against_base() {
        let links = discoverer().team_links(LEAGUE_PAGE);
        assert_eq!(
            links,
            vec![
                "https://www.transfermarkt.co.uk/arsenal-fc/startseite/verein/11",
                "https://www.transfermarkt.co.uk/fc-chelsea/startseite/verein/631",
            ]
        );
    }

    #[test]
    fn team_links_empty_without_marker() {
        assert!(discoverer().team_links("<html><body><p>maintenance</p></body></html>").is_empty());
    }

    #[test]
    fn player_links_skip_valuation_rows() {
        let page = r#"
            <table class="items">
              <tr><td class="hauptlink"><a href="/bukayo-saka/profil/spieler/433177">Bukayo Saka</a></td></tr>
              <tr><td class="hauptlink"><a href="/martin-odegaard/profil/spieler/316264">Martin Ødegaard</a></td></tr>
              <tr><td class="hauptlink"><a href="/arsenal-fc/kader/verein/11">€1.34bn</a></td></tr>
            </table>
        "#;
        let links = discoverer().player_links(page);
        assert_eq!(
            links,
            vec![
                "https://www.transfermarkt.co.uk/bukayo-saka/profil/spieler/433177",
                "https://www.transfermarkt.co.uk/martin-odegaard/profil/spieler/316264",
            ]
        );
    }

    #[test]
    fn player_links_empty_without_table() {
        let page = r#"<td class="hauptlink"><a href="/someone/profil/spieler/1">Someone</a></td>"#;
        assert!(discoverer().player_links(page).is_empty());
        assert!(discoverer().player_links("").is_empty());
    }

    #[test]
    fn player_links_ignore_cells_outside_first_table() {
        let page = r#"
            <table class="items"><tr><td class="hauptlink"><a href="/a/profil/spieler/1">A</a></td></tr></table>
            <table class="other"><tr><td class="hauptlink"><a href="/b/profil/spieler/2">B</a></td></tr></table>
        "#;
        assert_eq!(discoverer().player_links(page).len(), 1);
    }
}
