use serde_json::Value;

use super::event::EventId;
use super::{created_id, Api, ApiResult};

/// Payload for signing someone up to an event.
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct NewRegistration {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub roll_no: String,
    pub phone: String,
}

pub struct Registration;

impl Registration {
    // Create a registration, returning its id.
    pub async fn create(api: &Api, registration: &NewRegistration) -> ApiResult<Value> {
        created_id(api.post_json("/api/registrations", registration).await?)
    }
}
