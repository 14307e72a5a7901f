//! Page-level services for the roster scraper.
//!
//! This module contains the site-specific extraction logic:
//! - Link discovery on league and team pages (`LinkDiscoverer`)
//! - Player field extraction (`PlayerParser`)
//! - Compiled page markers (`PageSelectors`)

mod links;
mod player;
mod selectors;

pub use links::LinkDiscoverer;
pub use player::PlayerParser;
pub use selectors::{PageSelectors, parse_selector};
