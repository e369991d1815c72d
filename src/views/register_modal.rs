use crate::api::event::Event;
use crate::api::registration::{NewRegistration, Registration};
use crate::api::Api;
use crate::views::dates;

/// Unsubmitted registration form fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: String,
    pub roll_no: String,
    pub phone: String,
}

/// Registration dialog for the selected event. Closed when nothing is selected.
#[derive(Debug, Default)]
pub struct RegisterModal {
    event: Option<Event>,
    pub draft: RegistrationDraft,
}

impl RegisterModal {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(event: Event) -> Self {
        Self { event: Some(event), draft: RegistrationDraft::default() }
    }

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.event.is_some()
    }

    pub fn when(&self) -> String {
        self.event.as_ref().map(|e| dates::datetime_label(&e.date)).unwrap_or_default()
    }

    /// Submit the registration. Returns `true` once the API has accepted it.
    pub async fn submit(&self, api: &Api) -> bool {
        let Some(event) = &self.event else {
            return false;
        };
        let registration = NewRegistration {
            event_id: event.id.clone(),
            name: self.draft.name.clone(),
            email: self.draft.email.clone(),
            department: self.draft.department.clone(),
            year: self.draft.year.clone(),
            roll_no: self.draft.roll_no.clone(),
            phone: self.draft.phone.clone(),
        };
        match Registration::create(api, &registration).await {
            Ok(id) => {
                tracing::info!("registered for event id={} as id={id}", event.id);
                true
            }
            Err(e) => {
                tracing::error!("registering for event id={}: {e}", event.id);
                false
            }
        }
    }
}
