//! Site configuration: feed endpoints, fallbacks, and presentation tunables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client ships as a static WASM bundle, so there is no runtime
//! environment to read. Overrides are captured at compile time through
//! `option_env!` and funneled through [`SiteConfig::from_lookup`], which keeps
//! the parsing rules testable with a plain closure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SUBSCRIBERS_URL: &str =
    "https://api.socialcounts.org/youtube-live-subscriber-count/UCXWyPfi0iwSE0UxgI6bthrQ";
pub const DEFAULT_BLOG_INDEX_URL: &str = "https://blog.zynji.my.id/index.json";
pub const DEFAULT_CONTENT_INDEX_URL: &str = "https://blog.zynji.my.id/en/index.json";
pub const DEFAULT_SITE_BASE_URL: &str = "https://blog.zynji.my.id";
pub const DEFAULT_THUMBNAIL_URL: &str = "https://blog.zynji.my.id/thumb1.png";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_STATS_THRESHOLD: f64 = 0.5;
pub const DEFAULT_PROJECTS_THRESHOLD: f64 = 0.1;

/// Configuration parse failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Values shown when a stat endpoint cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatFallbacks {
    pub subscribers: u64,
    pub channel_views: u64,
    pub posts: u64,
}

impl Default for StatFallbacks {
    fn default() -> Self {
        Self { subscribers: 12_500, channel_views: 20_000, posts: 0 }
    }
}

/// Count-up durations per stat tile, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterDurations {
    pub subscribers_ms: f64,
    pub posts_ms: f64,
    pub views_ms: f64,
    pub projects_ms: f64,
}

impl Default for CounterDurations {
    fn default() -> Self {
        Self { subscribers_ms: 2000.0, posts_ms: 1500.0, views_ms: 2500.0, projects_ms: 1000.0 }
    }
}

/// One project filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self { label: label.to_owned(), value: value.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub subscribers_url: String,
    pub blog_index_url: String,
    pub content_index_url: String,
    pub site_base_url: String,
    pub default_thumbnail: String,
    pub theme_storage_key: String,
    pub fallbacks: StatFallbacks,
    pub durations: CounterDurations,
    pub stats_threshold: f64,
    pub projects_threshold: f64,
    pub project_filters: Vec<FilterOption>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            subscribers_url: DEFAULT_SUBSCRIBERS_URL.to_owned(),
            blog_index_url: DEFAULT_BLOG_INDEX_URL.to_owned(),
            content_index_url: DEFAULT_CONTENT_INDEX_URL.to_owned(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_owned(),
            default_thumbnail: DEFAULT_THUMBNAIL_URL.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            fallbacks: StatFallbacks::default(),
            durations: CounterDurations::default(),
            stats_threshold: DEFAULT_STATS_THRESHOLD,
            projects_threshold: DEFAULT_PROJECTS_THRESHOLD,
            project_filters: default_filters(),
        }
    }
}

impl SiteConfig {
    /// Build config from a key lookup, starting from the defaults.
    ///
    /// Recognized keys:
    /// - `PORTFOLIO_SUBSCRIBERS_URL`
    /// - `PORTFOLIO_BLOG_INDEX_URL`
    /// - `PORTFOLIO_CONTENT_INDEX_URL`
    /// - `PORTFOLIO_SITE_BASE_URL`: trailing `/` is trimmed
    /// - `PORTFOLIO_STATS_THRESHOLD`: `0.0..=1.0`, default 0.5
    /// - `PORTFOLIO_PROJECTS_THRESHOLD`: `0.0..=1.0`, default 0.1
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a threshold does not parse
    /// or falls outside `0.0..=1.0`, or when a URL override is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_blank_url(&lookup, "PORTFOLIO_SUBSCRIBERS_URL")? {
            config.subscribers_url = url;
        }
        if let Some(url) = non_blank_url(&lookup, "PORTFOLIO_BLOG_INDEX_URL")? {
            config.blog_index_url = url;
        }
        if let Some(url) = non_blank_url(&lookup, "PORTFOLIO_CONTENT_INDEX_URL")? {
            config.content_index_url = url;
        }
        if let Some(url) = non_blank_url(&lookup, "PORTFOLIO_SITE_BASE_URL")? {
            config.site_base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(value) = parse_threshold(&lookup, "PORTFOLIO_STATS_THRESHOLD")? {
            config.stats_threshold = value;
        }
        if let Some(value) = parse_threshold(&lookup, "PORTFOLIO_PROJECTS_THRESHOLD")? {
            config.projects_threshold = value;
        }

        Ok(config)
    }

    /// Build config from values captured at compile time.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| build_env(key).map(str::to_owned))
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "PORTFOLIO_SUBSCRIBERS_URL" => option_env!("PORTFOLIO_SUBSCRIBERS_URL"),
        "PORTFOLIO_BLOG_INDEX_URL" => option_env!("PORTFOLIO_BLOG_INDEX_URL"),
        "PORTFOLIO_CONTENT_INDEX_URL" => option_env!("PORTFOLIO_CONTENT_INDEX_URL"),
        "PORTFOLIO_SITE_BASE_URL" => option_env!("PORTFOLIO_SITE_BASE_URL"),
        "PORTFOLIO_STATS_THRESHOLD" => option_env!("PORTFOLIO_STATS_THRESHOLD"),
        "PORTFOLIO_PROJECTS_THRESHOLD" => option_env!("PORTFOLIO_PROJECTS_THRESHOLD"),
        _ => None,
    }
}

fn non_blank_url<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidValue { key, value: raw }),
        Some(raw) => Ok(Some(raw.trim().to_owned())),
    }
}

fn parse_threshold<F>(lookup: &F, key: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => Ok(Some(value)),
        _ => Err(ConfigError::InvalidValue { key, value: raw }),
    }
}

fn default_filters() -> Vec<FilterOption> {
    vec![
        FilterOption::new("All", "all"),
        FilterOption::new("Web", "web"),
        FilterOption::new("Mobile", "mobile"),
        FilterOption::new("Tools", "tools"),
        FilterOption::new("AI", "ai"),
    ]
}
