// src/models/mod.rs

//! Domain models for the roster scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod club;
mod config;
mod player;
mod roster;
mod selectors;

// Re-export all public types
pub use club::{Club, assign, create_clubs, team_names_from};
pub use config::{Config, CrawlerConfig, FilterConfig, SiteConfig};
pub use player::{DEFAULT_TEMPLATE, Player};
pub use roster::Roster;
pub use selectors::SelectorConfig;
