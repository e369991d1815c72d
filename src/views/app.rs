use chrono_tz::Tz;

use crate::api::Api;
use crate::views::create_event::CreateEvent;
use crate::views::event_list::EventList;
use crate::views::register_modal::RegisterModal;

/// Composition root of the page.
///
/// Owns the selection (through the modal it opens) and the refresh counter,
/// and wires the create form to the list and the list to the modal.
#[derive(Debug, Default)]
pub struct App {
    pub list: EventList,
    pub create: CreateEvent,
    pub modal: RegisterModal,
    refreshes: u64,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount(&mut self, api: &Api) {
        self.list.mount(api).await;
    }

    /// Select a loaded event by id, opening the registration modal.
    /// Returns `false` if no loaded event has that id.
    pub fn select(&mut self, raw_id: &str) -> bool {
        match self.list.find(raw_id) {
            Some(event) => {
                self.modal = RegisterModal::open(event.clone());
                true
            }
            None => false,
        }
    }

    /// Clear the selection, closing the modal.
    pub fn close(&mut self) {
        self.modal = RegisterModal::closed();
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        self.list.reload();
    }

    /// Submit the create form. If the event was created the list is marked
    /// stale, and the next `mount` fetches it again.
    pub async fn create_event(&mut self, api: &Api, tz: Tz) -> bool {
        let created = self.create.submit(api, tz).await;
        if created {
            self.refresh();
        }
        created
    }

    /// Submit the registration form, closing the modal if it was accepted.
    pub async fn register(&mut self, api: &Api) -> bool {
        let registered = self.modal.submit(api).await;
        if registered {
            self.close();
        }
        registered
    }
}
