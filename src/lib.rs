// src/lib.rs

//! Roster scraper library
//!
//! Walks a league index to team pages, team pages to player pages, and groups
//! the scraped players into clubs.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
