//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;
use crate::services::PageSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and worker pool settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Target site locations
    #[serde(default)]
    pub site: SiteConfig,

    /// Team name filtering rules
    #[serde(default)]
    pub filter: FilterConfig,

    /// Page markers used by the link discoverers and field parsers
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.workers == 0 {
            return Err(AppError::validation("crawler.workers must be > 0"));
        }
        self.site.base()?;
        self.site.league_url()?;
        PageSelectors::compile(&self.selectors)?;
        Ok(())
    }
}

/// HTTP client and worker pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header attached to every request
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Number of concurrent pool workers
    #[serde(default = "defaults::workers")]
    pub workers: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            workers: defaults::workers(),
        }
    }
}

/// Where the league index lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site root; relative links on every page resolve against it
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the league index page (an absolute URL replaces the base)
    #[serde(default = "defaults::league_path")]
    pub league_path: String,
}

impl SiteConfig {
    /// Parsed site root.
    pub fn base(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Absolute URL of the league index page.
    pub fn league_url(&self) -> Result<String> {
        Ok(self.base()?.join(&self.league_path)?.to_string())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            league_path: defaults::league_path(),
        }
    }
}

/// Team name filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Team names containing any of these substrings never become clubs
    #[serde(default = "defaults::excluded_team_markers")]
    pub excluded_team_markers: Vec<String>,
}

impl FilterConfig {
    /// Whether a scraped team name may key a club.
    pub fn accepts(&self, team: &str) -> bool {
        !self
            .excluded_team_markers
            .iter()
            .any(|marker| team.contains(marker.as_str()))
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_team_markers: defaults::excluded_team_markers(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn workers() -> usize {
        10
    }

    // Site defaults
    pub fn base_url() -> String {
        "https://www.transfermarkt.co.uk".into()
    }
    pub fn league_path() -> String {
        "/premier-league/startseite/wettbewerb/gb1".into()
    }

    // Filter defaults
    pub fn excluded_team_markers() -> Vec<String> {
        vec!["U21".into()]
    }
}
