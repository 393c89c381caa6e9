use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// An item to be saved via an `add` action.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub url: String,
    pub title: String,
    /// Comma-separated tag list, as the API expects.
    pub tags: String,
}

/// A stored item as returned by `/v3/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub item_id: String,
    #[serde(default, deserialize_with = "tags_from_map")]
    pub tags: HashSet<String>,
    #[serde(deserialize_with = "datetime_from_epoch_str")]
    pub time_added: DateTime<Utc>,
}

/// Response body of `/v3/get`.
#[derive(Debug, Deserialize)]
pub(crate) struct GetResponse {
    #[serde(default, deserialize_with = "list_or_empty")]
    pub list: HashMap<String, Item>,
}

/// Response body of `/v3/send`.
#[derive(Debug, Deserialize)]
pub(crate) struct SendResponse {
    #[serde(default)]
    pub action_results: Vec<Value>,
}

impl SendResponse {
    /// Count of actions the API accepted; a failed action comes back as `false`.
    pub fn accepted(&self) -> usize {
        self.action_results
            .iter()
            .filter(|r| !matches!(r, Value::Bool(false)))
            .count()
    }
}

/// `tags` arrives as a map keyed by tag name; only the keys matter.
fn tags_from_map<'de, D>(deserializer: D) -> Result<HashSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: HashMap<String, Value> = HashMap::deserialize(deserializer)?;
    Ok(map.into_keys().collect())
}

/// `time_added` arrives as an epoch-seconds string.
fn datetime_from_epoch_str<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let secs: i64 = raw.parse().map_err(serde::de::Error::custom)?;
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", raw)))
}

/// The API returns `list` as `[]` instead of `{}` when there are no items.
fn list_or_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Item>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MapOrSeq {
        Map(HashMap<String, Item>),
        Seq(Vec<Value>),
    }

    match MapOrSeq::deserialize(deserializer)? {
        MapOrSeq::Map(map) => Ok(map),
        MapOrSeq::Seq(_) => Ok(HashMap::new()),
    }
}
