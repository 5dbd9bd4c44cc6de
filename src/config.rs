/// Application configuration
///
/// Everything is fixed at build time; there are no config files and no
/// environment lookups.

use std::num::NonZeroUsize;

use tracing::level_filters::LevelFilter;

/// Artworks collection of the Art Institute of Chicago
pub const DEFAULT_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// Rows per page served by the API when no limit is sent
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint queried with `?page=<n>`
    pub endpoint: String,
    /// Page size the server is expected to use
    pub page_size: NonZeroUsize,
    /// Most verbose log level emitted by this crate
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LevelFilter::INFO,
        }
    }
}

impl Config {
    /// Filter directive that silences dependencies and keeps this crate at
    /// the configured level
    pub fn log_filter(&self) -> String {
        format!("off,{}={}", env!("CARGO_CRATE_NAME"), self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size.get(), 10);
    }

    #[test]
    fn test_log_filter() {
        let config = Config {
            log_level: LevelFilter::DEBUG,
            ..Config::default()
        };

        assert_eq!(config.log_filter(), "off,artwork_browser=debug");
    }
}
