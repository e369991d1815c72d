use chrono_tz::Tz;

use crate::api::event::{Event, NewEvent};
use crate::api::Api;
use crate::views::dates;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DraftError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("invalid capacity: {0:?}")]
    InvalidCapacity(String),
    #[error("invalid tag list: {0}")]
    InvalidTags(String),
}

/// Unsubmitted event form fields, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// Value of a `datetime-local` input, e.g. `2025-04-10T09:30`.
    pub date: String,
    pub location: String,
    pub capacity: String,
}

/// The "Add an Event" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateEvent {
    pub draft: EventDraft,
    /// Current tag input.
    pub tag: String,
    pub tags: Vec<String>,
}

impl CreateEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the form from a submission, where the tag list travels as a JSON array.
    pub fn from_submission(draft: EventDraft, tag: String, tags_json: &str) -> Result<Self, DraftError> {
        let tags = match tags_json.trim() {
            "" => Vec::new(),
            json => serde_json::from_str(json).map_err(|e| DraftError::InvalidTags(e.to_string()))?,
        };
        Ok(Self { draft, tag, tags })
    }

    /// Append the trimmed tag input and clear it. Blank input is ignored.
    pub fn add_tag(&mut self) {
        let tag = self.tag.trim();
        if tag.is_empty() {
            return;
        }
        self.tags.push(tag.to_string());
        self.tag.clear();
    }

    pub fn tags_json(&self) -> String {
        serde_json::to_string(&self.tags).unwrap_or_else(|_| "[]".into())
    }

    /// Build the request body, with the date input interpreted in `tz`.
    pub fn payload(&self, tz: Tz) -> Result<NewEvent, DraftError> {
        let capacity = match self.draft.capacity.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(c) if c > 0 => Some(c),
                _ => return Err(DraftError::InvalidCapacity(raw.into())),
            },
        };
        let date = dates::local_input_to_iso(&self.draft.date, tz)
            .ok_or_else(|| DraftError::InvalidDate(self.draft.date.clone()))?;

        Ok(NewEvent {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            date,
            location: self.draft.location.clone(),
            capacity,
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
        })
    }

    /// Submit the form. On success the form is cleared and `true` is returned,
    /// otherwise the failure is logged and the form is left as-is.
    pub async fn submit(&mut self, api: &Api, tz: Tz) -> bool {
        let payload = match self.payload(tz) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("creating event: {e}");
                return false;
            }
        };
        match Event::create(api, &payload).await {
            Ok(id) => {
                tracing::info!("created event id={id}");
                self.reset();
                true
            }
            Err(e) => {
                tracing::error!("creating event: {e}");
                false
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
