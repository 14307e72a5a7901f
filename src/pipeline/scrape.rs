// src/pipeline/scrape.rs

//! Roster scraping pipeline.
//!
//! League page -> team pages -> player pages -> clubs. Every team page and
//! every player page is its own pool unit, so a failure costs exactly one unit.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Config, Player, Roster, assign, create_clubs, team_names_from};
use crate::pipeline::pool::{PoolOutcome, UnitFailure, WorkerPool};
use crate::services::{LinkDiscoverer, PageSelectors, PlayerParser};
use crate::utils::http::{HttpFetcher, PageFetcher};

/// Counters and timings for one scrape run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub team_units: usize,
    pub team_failures: usize,
    pub player_units: usize,
    pub player_failures: usize,
    /// Fetched players whose team matched no club
    pub dropped_players: usize,
}

impl RunStats {
    pub fn elapsed_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Result of a full scrape.
#[derive(Debug)]
pub struct ScrapeReport {
    pub roster: Roster,
    pub stats: RunStats,
    pub failures: Vec<UnitFailure<String>>,
}

/// Result of the standalone team-name discovery pass.
#[derive(Debug, Default)]
pub struct TeamNames {
    pub names: BTreeSet<String>,
    pub failures: Vec<UnitFailure<String>>,
}

/// Drives fetching, parsing and assembly across the worker pool.
#[derive(Clone)]
pub struct RosterScraper {
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    links: LinkDiscoverer,
    parser: PlayerParser,
    pool: WorkerPool,
}

impl RosterScraper {
    /// Create a scraper over any page source.
    pub fn new(config: Arc<Config>, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let selectors = Arc::new(PageSelectors::compile(&config.selectors)?);
        let base = config.site.base()?;

        Ok(Self {
            links: LinkDiscoverer::new(Arc::clone(&selectors), base),
            parser: PlayerParser::new(selectors),
            pool: WorkerPool::new(config.crawler.workers),
            config,
            fetcher,
        })
    }

    /// Create a scraper that fetches over HTTP.
    pub fn with_http(config: Arc<Config>) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config.crawler)?;
        Self::new(config, Arc::new(fetcher))
    }

    /// Fetch the league index and list its team pages.
    ///
    /// This is the only fetch whose failure aborts a run.
    pub async fn team_links(&self) -> Result<Vec<String>> {
        let url = self.config.site.league_url()?;
        let html = self.fetcher.fetch(&url).await?;
        let links = self.links.team_links(&html);
        log::info!("Found {} team pages on {}", links.len(), url);
        Ok(links)
    }

    /// Discover player links, one unit per team page.
    pub async fn player_links(&self, team_links: Vec<String>) -> PoolOutcome<String, Vec<String>> {
        let fetcher = Arc::clone(&self.fetcher);
        let links = self.links.clone();

        self.pool
            .run(team_links, move |team_url| {
                let fetcher = Arc::clone(&fetcher);
                let links = links.clone();
                async move {
                    let html = fetcher.fetch(&team_url).await?;
                    Ok(links.player_links(&html))
                }
            })
            .await
    }

    /// Fetch and parse player pages, one unit per player.
    pub async fn fetch_players(&self, player_links: Vec<String>) -> PoolOutcome<String, Player> {
        let fetcher = Arc::clone(&self.fetcher);
        let parser = self.parser.clone();

        self.pool
            .run(player_links, move |player_url| {
                let fetcher = Arc::clone(&fetcher);
                let parser = parser.clone();
                async move {
                    let html = fetcher.fetch(&player_url).await?;
                    Ok(parser.parse(&html))
                }
            })
            .await
    }

    /// Fetch a single player page.
    pub async fn fetch_player(&self, url: &str) -> Result<Player> {
        let html = self.fetcher.fetch(url).await?;
        Ok(self.parser.parse(&html))
    }

    /// Collect the club names seen on player pages, one unit per team.
    ///
    /// Each unit reads its team page and then every player page on it; a
    /// failing fetch anywhere inside drops that team's contribution.
    pub async fn discover_team_names(&self) -> Result<TeamNames> {
        let team_links = self.team_links().await?;
        let fetcher = Arc::clone(&self.fetcher);
        let links = self.links.clone();
        let parser = self.parser.clone();
        let filter = self.config.filter.clone();

        let outcome = self
            .pool
            .run(team_links, move |team_url| {
                let fetcher = Arc::clone(&fetcher);
                let links = links.clone();
                let parser = parser.clone();
                let filter = filter.clone();
                async move {
                    let html = fetcher.fetch(&team_url).await?;
                    let mut names = BTreeSet::new();
                    for player_url in links.player_links(&html) {
                        let page = fetcher.fetch(&player_url).await?;
                        if let Some(team) = parser.parse_team(&page)
                            && filter.accepts(&team)
                        {
                            names.insert(team);
                        }
                    }
                    Ok(names)
                }
            })
            .await;

        let mut result = TeamNames {
            failures: outcome.failed,
            ..TeamNames::default()
        };
        for (_, names) in outcome.succeeded {
            result.names.extend(names);
        }

        log::info!(
            "Discovered {} team names ({} team units failed)",
            result.names.len(),
            result.failures.len()
        );
        Ok(result)
    }

    /// Run the whole pipeline and assemble the roster.
    ///
    /// Team names are derived once, from the players fetched in this run, and
    /// passed to club creation; no page is fetched twice.
    pub async fn scrape(&self) -> Result<ScrapeReport> {
        let started_at = Utc::now();

        let team_links = self.team_links().await?;
        let team_units = team_links.len();

        log::info!("Discovering player links across {team_units} teams...");
        let link_outcome = self.player_links(team_links).await;
        let team_failures = link_outcome.failure_count();
        let player_links = unique_links(&link_outcome);
        let player_units = player_links.len();

        log::info!("Fetching {player_units} player pages...");
        let player_outcome = self.fetch_players(player_links).await;
        let player_failures = player_outcome.failure_count();

        let mut failures = link_outcome.failed;
        failures.extend(player_outcome.failed);
        let players: Vec<Player> = player_outcome
            .succeeded
            .into_iter()
            .map(|(_, player)| player)
            .collect();

        let names = team_names_from(&players, &self.config.filter);
        let mut clubs = create_clubs(names);

        let mut dropped_players = 0;
        for player in players {
            if !assign(player, &mut clubs) {
                dropped_players += 1;
            }
        }

        let roster = Roster::from_clubs(clubs);
        let stats = RunStats {
            started_at,
            finished_at: Utc::now(),
            team_units,
            team_failures,
            player_units,
            player_failures,
            dropped_players,
        };

        log::info!(
            "Assembled {} clubs with {} players ({} dropped, {} units failed)",
            roster.team_count(),
            roster.player_count(),
            stats.dropped_players,
            failures.len()
        );

        Ok(ScrapeReport {
            roster,
            stats,
            failures,
        })
    }
}

/// Flatten per-team link lists, keeping the first occurrence of each URL.
fn unique_links(outcome: &PoolOutcome<String, Vec<String>>) -> Vec<String> {
    let mut seen = HashSet::new();
    outcome
        .succeeded
        .iter()
        .flat_map(|(_, links)| links.iter())
        .filter(|link| seen.insert(link.as_str()))
        .cloned()
        .collect()
}
