use std::fmt;

use serde_json::Value;

use super::{created_id, Api, ApiResult};

/// Opaque event identifier assigned by the API.
///
/// Kept in whichever JSON type the API uses so it can be echoed back as-is.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum EventId {
    Text(String),
    Number(i64),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Text(s) => f.write_str(s),
            EventId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl EventId {
    /// Compare against an id taken from a URL or form field.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            EventId::Text(s) => s == raw,
            EventId::Number(n) => raw.trim().parse::<i64>().is_ok_and(|r| r == *n),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw timestamp as sent by the API, formatted only for display.
    pub date: String,
    pub location: String,
    #[serde(default, deserialize_with = "seat_count")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Seat counts that aren't whole non-negative numbers are treated as absent.
fn seat_count<'de, D: serde::Deserializer<'de>>(de: D) -> Result<Option<u32>, D::Error> {
    let value = <Option<Value> as serde::Deserialize>::deserialize(de)?;
    Ok(value.as_ref().and_then(Value::as_u64).and_then(|n| u32::try_from(n).ok()))
}

/// Payload for creating an event.
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    /// ISO-8601 UTC instant.
    pub date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Event {
    // List all events, skipping any the API sends in a shape we can't display.
    pub async fn list(api: &Api) -> ApiResult<Vec<Event>> {
        let raw: Vec<Value> = api.get_json("/api/events").await?;
        let events = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<Event>(value) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!("skipping malformed event: {e}");
                    None
                }
            })
            .collect();
        Ok(events)
    }

    // Create a new event, returning its id.
    pub async fn create(api: &Api, event: &NewEvent) -> ApiResult<Value> {
        created_id(api.post_json("/api/events", event).await?)
    }
}
