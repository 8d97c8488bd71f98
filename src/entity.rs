use crate::{error::Error, model::ItunesItem};
use serde::Serialize;
use serde_json::Value;

const URL_TEMPLATE: &str = "https://podcasts.apple.com/us/podcast/id";

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Podcast {
    pub id: u64,
    pub name: String,
    pub author: String,
    pub url: String,
    pub feed: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub country: Option<String>,
    pub episode_count: Option<u32>,
}

pub fn canonical_url(id: u64) -> String {
    format!("{}{}", URL_TEMPLATE, id)
}

fn required(value: Option<String>, field: &str, raw: &Value) -> Result<String, Error> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(Error::parse(format!("empty field `{}`", field), raw)),
        None => Err(Error::parse(format!("missing field `{}`", field), raw)),
    }
}

impl Podcast {
    /// Builds a podcast from one result item; `raw` is the untyped item, kept for error reports.
    pub fn from_item(item: ItunesItem, raw: &Value) -> Result<Self, Error> {
        let id = item
            .collection_id
            .ok_or_else(|| Error::parse("missing field `collectionId`", raw))?;
        let name = required(item.collection_name, "collectionName", raw)?;
        let author = required(item.artist_name, "artistName", raw)?;
        Ok(Podcast {
            id,
            name,
            author,
            url: canonical_url(id),
            feed: item.feed_url,
            category: item.primary_genre_name,
            image: item.artwork_url600,
            country: item.country,
            episode_count: item.track_count,
        })
    }
}
