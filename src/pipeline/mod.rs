//! Pipeline entry points for scraper operations.
//!
//! - `pool`: Fixed-width worker pool with fail-soft result collection
//! - `scrape`: League -> team -> player fan-out and roster assembly

pub mod pool;
pub mod scrape;

pub use pool::{PoolOutcome, UnitFailure, UnitOutcome, WorkerPool};
pub use scrape::{RosterScraper, RunStats, ScrapeReport, TeamNames};
