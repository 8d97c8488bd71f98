pub const BASE_URL: &str = "https://itunes.apple.com";
pub const BASE_URL_ENV: &str = "PODSEARCH_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: BASE_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Reads `PODSEARCH_BASE_URL`, falling back to the public iTunes host.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log::debug!("base url from {}: {}", BASE_URL_ENV, url);
                Config::with_base_url(url.trim())
            }
            _ => Config::default(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    pub fn lookup_url(&self) -> String {
        format!("{}/lookup", self.base_url)
    }
}
