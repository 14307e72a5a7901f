// src/services/player.rs

//! Player detail page parser.
//!
//! Every field lookup is total: a missing marker yields `None`, never an error,
//! so one broken element on a page never costs the rest of the record.

use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};

use crate::models::Player;
use crate::services::PageSelectors;
use crate::utils::{non_empty_text, stripped_text};

/// Extracts `Player` fields from a detail page.
#[derive(Debug, Clone)]
pub struct PlayerParser {
    selectors: Arc<PageSelectors>,
}

impl PlayerParser {
    pub fn new(selectors: Arc<PageSelectors>) -> Self {
        Self { selectors }
    }

    /// Parse a whole detail page.
    pub fn parse(&self, html: &str) -> Player {
        let document = Html::parse_document(html);
        Player {
            name: self.name(&document),
            age: self.age(&document),
            height: self.height(&document),
            team: self.team(&document),
            market_value: self.market_value(&document),
            position: self.position(&document),
            nationality: self.nationality(&document),
        }
    }

    /// Parse only the team field; used by the team-name discovery pass.
    pub fn parse_team(&self, html: &str) -> Option<String> {
        self.team(&Html::parse_document(html))
    }

    /// Player name.
    ///
    /// Lookup order: first entry of the keywords metadata, then the "full name"
    /// row of the info table, then the "name in home country" row. Once a label
    /// row is found its value decides the result, even if that value is missing.
    pub fn name(&self, document: &Html) -> Option<String> {
        if let Some(name) = self.meta_name(document) {
            return Some(name);
        }

        for label in [
            &self.selectors.full_name_label,
            &self.selectors.home_name_label,
        ] {
            if let Some(label_elem) = self.find_label(document, label) {
                return self
                    .next_sibling_matching(label_elem, &self.selectors.info_value)
                    .and_then(non_empty_text);
            }
        }

        None
    }

    /// Age taken from the "date of birth (age)" header field.
    ///
    /// Without a parenthesized suffix the whole trimmed text is returned.
    pub fn age(&self, document: &Html) -> Option<String> {
        let text = self.text_of(document, &self.selectors.birth_date)?;
        let tail = text.rsplit('(').next().unwrap_or(&text);
        Some(tail.replace(')', "").trim().to_string()).filter(|age| !age.is_empty())
    }

    pub fn height(&self, document: &Html) -> Option<String> {
        self.text_of(document, &self.selectors.height)
    }

    pub fn nationality(&self, document: &Html) -> Option<String> {
        self.text_of(document, &self.selectors.nationality)
    }

    /// Current club, read from the link inside the header club span.
    pub fn team(&self, document: &Html) -> Option<String> {
        let club = document.select(&self.selectors.club).next()?;
        let link = club.select(&self.selectors.link).next()?;
        non_empty_text(link)
    }

    /// Market value as `<symbol><number><unit>`, e.g. `€50m`.
    ///
    /// The symbol and unit come from the first two part spans and the number
    /// from the container's own text. All three must be present.
    pub fn market_value(&self, document: &Html) -> Option<String> {
        let container = document.select(&self.selectors.market_value).next()?;

        let mut parts = container.select(&self.selectors.market_value_part);
        let symbol = non_empty_text(parts.next()?)?;
        let unit = non_empty_text(parts.next()?)?;

        let number = container
            .children()
            .filter_map(|node| node.value().as_text())
            .map(|text| text.trim())
            .find(|text| !text.is_empty())?;

        Some(format!("{symbol}{number}{unit}"))
    }

    pub fn position(&self, document: &Html) -> Option<String> {
        self.text_of(document, &self.selectors.position)
    }

    fn meta_name(&self, document: &Html) -> Option<String> {
        let content = document
            .select(&self.selectors.name_meta)
            .next()?
            .value()
            .attr("content")?;
        let first = content.split(',').next()?.trim();
        (!first.is_empty()).then(|| first.to_string())
    }

    fn find_label<'a>(&self, document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
        document
            .select(&self.selectors.info_label)
            .find(|elem| stripped_text(*elem) == label)
    }

    fn next_sibling_matching<'a>(
        &self,
        elem: ElementRef<'a>,
        selector: &Selector,
    ) -> Option<ElementRef<'a>> {
        elem.next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| selector.matches(sibling))
    }

    fn text_of(&self, document: &Html, selector: &Selector) -> Option<String> {
        document.select(selector).next().and_then(non_empty_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectorConfig;

    fn parser() -> PlayerParser {
        let selectors = PageSelectors::compile(&SelectorConfig::default()).unwrap();
        PlayerParser::new(Arc::new(selectors))
    }

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><head></head><body>{body}</body></html>"))
    }

    const FULL_PAGE: &str = r#"
        <html><head>
          <meta name="keywords" content="Bukayo Saka, Arsenal FC, Premier League">
        </head><body>
          <header>
            <span class="data-header__club" itemprop="affiliation"><a href="/arsenal-fc/startseite/verein/11">Arsenal FC</a></span>
            <span class="data-header__content" itemprop="birthDate">Sep 5, 2001 (22)</span>
            <span class="data-header__content" itemprop="height">1,78 m</span>
            <span class="data-header__content" itemprop="nationality"><img alt="England"> England</span>
            <a class="data-header__market-value-wrapper" href="/bukayo-saka/marktwertverlauf/spieler/433177"><span class="waehrung">€</span>140.00<span class="waehrung">m</span> <p>Last update: Dec 19, 2023</p></a>
          </header>
          <dl><dd class="detail-position__position">Right Winger</dd></dl>
        </body></html>
    "#;

    #[test]
    fn parse_full_page() {
        let player = parser().parse(FULL_PAGE);
        assert_eq!(
            player,
            Player {
                name: Some("Bukayo Saka".to_string()),
                age: Some("22".to_string()),
                height: Some("1,78 m".to_string()),
                team: Some("Arsenal FC".to_string()),
                market_value: Some("€140.00m".to_string()),
                position: Some("Right Winger".to_string()),
                nationality: Some("England".to_string()),
            }
        );
    }

    #[test]
    fn parse_empty_page_is_all_absent() {
        assert_eq!(parser().parse("<html></html>"), Player::default());
        assert_eq!(parser().parse(""), Player::default());
    }

    #[test]
    fn name_absent_without_any_marker() {
        let page = doc(r#"<span class="info-table__content--regular">Place of birth:</span>
                          <span class="info-table__content--bold">London</span>"#);
        assert_eq!(parser().name(&page), None);
    }

    #[test]
    fn name_meta_wins_over_labels() {
        let page = Html::parse_document(
            r#"<html><head><meta name="keywords" content="Meta Name,Club"></head><body>
               <span class="info-table__content--regular">Full name:</span>
               <span class="info-table__content--bold">Label Name</span>
               </body></html>"#,
        );
        assert_eq!(parser().name(&page), Some("Meta Name".to_string()));
    }

    #[test]
    fn name_falls_back_to_full_name_label() {
        let page = doc(r#"<div>
            <span class="info-table__content--regular">Name in home country:</span>
            <span class="info-table__content--bold">Home Name</span>
            <span class="info-table__content--regular">Full name:</span>
            <span class="info-table__content--bold">Full Name</span>
        </div>"#);
        assert_eq!(parser().name(&page), Some("Full Name".to_string()));
    }

    #[test]
    fn name_falls_back_to_home_country_label() {
        let page = doc(r#"<div>
            <span class="info-table__content--regular">Name in home country:</span>
            <span class="info-table__content--bold">Martin Ødegaard</span>
        </div>"#);
        assert_eq!(parser().name(&page), Some("Martin Ødegaard".to_string()));
    }

    #[test]
    fn name_stops_at_label_without_value() {
        let page = doc(r#"<div>
            <span class="info-table__content--regular">Full name:</span>
        </div><div>
            <span class="info-table__content--regular">Name in home country:</span>
            <span class="info-table__content--bold">Unreached</span>
        </div>"#);
        assert_eq!(parser().name(&page), None);
    }

    #[test]
    fn age_strips_birth_date() {
        let page = doc(r#"<span class="data-header__content" itemprop="birthDate">Dec 17, 1998 (25)</span>"#);
        assert_eq!(parser().age(&page), Some("25".to_string()));
    }

    #[test]
    fn age_without_suffix_keeps_text() {
        let page = doc(r#"<span class="data-header__content" itemprop="birthDate">N/A</span>"#);
        assert_eq!(parser().age(&page), Some("N/A".to_string()));
    }

    #[test]
    fn market_value_concatenates_parts() {
        let page = doc(r#"<a class="data-header__market-value-wrapper"><span class="waehrung">€</span>50<span class="waehrung">m</span></a>"#);
        assert_eq!(parser().market_value(&page), Some("€50m".to_string()));
    }

    #[test]
    fn market_value_absent_without_wrapper() {
        let page = doc(r#"<div><span class="waehrung">€</span>50<span class="waehrung">m</span></div>"#);
        assert_eq!(parser().market_value(&page), None);
    }

    #[test]
    fn market_value_absent_when_unit_missing() {
        let page = doc(r#"<a class="data-header__market-value-wrapper"><span class="waehrung">€</span>50</a>"#);
        assert_eq!(parser().market_value(&page), None);
    }

    #[test]
    fn team_requires_link_in_club_span() {
        let page = doc(r#"<span class="data-header__club" itemprop="affiliation">Retired</span>"#);
        assert_eq!(parser().team(&page), None);
        assert_eq!(parser().parse_team(FULL_PAGE), Some("Arsenal FC".to_string()));
    }
}
