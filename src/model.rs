use serde::Deserialize;
use serde_json::Value;

/// Envelope returned by both the search and the lookup endpoint.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItunesResponse {
    pub result_count: Option<u64>,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// One entry of `results`, as sent by iTunes.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItunesItem {
    pub collection_id: Option<u64>,
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
    pub feed_url: Option<String>,
    pub primary_genre_name: Option<String>,
    pub artwork_url600: Option<String>,
    pub country: Option<String>,
    pub track_count: Option<u32>,
}

fn tag_is(raw: &Value, tag: &str, expected: &str) -> bool {
    match raw.get(tag) {
        None | Some(Value::Null) => true,
        Some(v) => v.as_str() == Some(expected),
    }
}

/// False when the item carries a `wrapperType` or `kind` marking some other media.
/// Untagged items count as podcasts.
pub fn is_podcast(raw: &Value) -> bool {
    tag_is(raw, "wrapperType", "track") && tag_is(raw, "kind", "podcast")
}
