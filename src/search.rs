use crate::{
    client::{Client, Param, Transport},
    config::Config,
    entity::Podcast,
    error::{Error, Result},
    model::{is_podcast, ItunesItem, ItunesResponse},
};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_LIMIT: u32 = 5;

/// Search and lookup against the iTunes directory.
pub struct Searcher<T: Transport> {
    transport: T,
    search_url: String,
    lookup_url: String,
}

impl Searcher<Client> {
    pub fn from_config(config: &Config) -> Self {
        Searcher::new(Client::new(&config.user_agent), config)
    }
}

impl Default for Searcher<Client> {
    fn default() -> Self {
        Searcher::from_config(&Config::from_env())
    }
}

impl<T: Transport> Searcher<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Searcher {
            transport,
            search_url: config.search_url(),
            lookup_url: config.lookup_url(),
        }
    }

    /// Search podcasts by name, author etc.
    ///
    /// `country` is an ISO alpha-2 code; without it the search is not restricted
    /// to any store.
    pub fn search(&self, query: &str, country: Option<&str>, limit: u32) -> Result<Vec<Podcast>> {
        let mut params: Vec<Param> = vec![
            ("term", query.to_string()),
            ("media", "podcast".to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(country) = country.filter(|c| !c.is_empty()) {
            params.push(("country", country.to_string()));
        }

        let response = self.transport.get(&self.search_url, &params).map_err(|e| {
            log::warn!("search {:?} failed: {}", query, e);
            e
        })?;
        let podcasts = parse_podcasts(&response)?;
        log::debug!("search {:?} found {} podcasts", query, podcasts.len());
        Ok(podcasts)
    }

    /// Get a podcast by its iTunes id.
    pub fn lookup(&self, id: u64) -> Result<Option<Podcast>> {
        let params: Vec<Param> = vec![("id", id.to_string())];
        let response = self.transport.get(&self.lookup_url, &params).map_err(|e| {
            log::warn!("lookup {} failed: {}", id, e);
            e
        })?;
        Ok(parse_podcasts(&response)?.into_iter().next())
    }
}

/// Maps a search/lookup response into podcasts.
///
/// Items tagged as other media are skipped. Any remaining item that cannot be
/// turned into a podcast fails the whole batch.
pub fn parse_podcasts(response: &Value) -> Result<Vec<Podcast>> {
    let envelope = ItunesResponse::deserialize(response)
        .map_err(|e| Error::parse(format!("unexpected response: {}", e), response))?;

    if envelope.result_count.unwrap_or(0) == 0 {
        return Ok(Vec::new());
    }

    let mut podcasts = Vec::with_capacity(envelope.results.len());
    for raw in &envelope.results {
        if !raw.is_object() {
            return Err(Error::parse("result is not an object", raw));
        }
        if !is_podcast(raw) {
            log::debug!(
                "skip non-podcast result {} / {}",
                raw.get("wrapperType").unwrap_or(&Value::Null),
                raw.get("kind").unwrap_or(&Value::Null)
            );
            continue;
        }
        let item = ItunesItem::deserialize(raw).map_err(|e| Error::parse(e.to_string(), raw))?;
        podcasts.push(Podcast::from_item(item, raw)?);
    }
    Ok(podcasts)
}
