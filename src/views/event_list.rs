use crate::api::event::Event;
use crate::api::Api;
use crate::views::event_card::EventCard;

#[derive(Debug, Default)]
enum ListState {
    #[default]
    Loading,
    Loaded(Vec<Event>),
}

/// The upcoming events section. Sole owner of the fetched events.
#[derive(Debug, Default)]
pub struct EventList {
    state: ListState,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the events once, unless they have already been fetched.
    pub async fn mount(&mut self, api: &Api) {
        if self.is_loading() {
            self.fetch(api).await;
        }
    }

    /// Discard the current events. The next `mount` fetches them again.
    pub fn reload(&mut self) {
        self.state = ListState::Loading;
    }

    async fn fetch(&mut self, api: &Api) {
        let events = match Event::list(api).await {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("loading events: {e}");
                Vec::new()
            }
        };
        self.state = ListState::Loaded(events);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn events(&self) -> &[Event] {
        match &self.state {
            ListState::Loading => &[],
            ListState::Loaded(events) => events,
        }
    }

    pub fn count(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }

    pub fn cards(&self) -> Vec<EventCard<'_>> {
        self.events().iter().map(EventCard::new).collect()
    }

    /// Look up a loaded event by an id taken from a request.
    pub fn find(&self, raw_id: &str) -> Option<&Event> {
        self.events().iter().find(|e| e.id.matches(raw_id))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::utils::config::ApiConfig;

    fn api(base_url: String) -> Api {
        Api::new(&ApiConfig { base_url, timeout_secs: None }).unwrap()
    }

    async fn serve_events(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn starts_loading() {
        let list = EventList::new();
        assert!(list.is_loading());
        assert_eq!(list.count(), 0);
    }

    #[tokio::test]
    async fn mount_fetches_once_and_keeps_order() {
        let server = MockServer::start().await;
        serve_events(
            &server,
            json!([
                {"id": 1, "title": "B", "date": "2025-04-10T09:30:00Z", "location": "Hall"},
                {"id": 2, "title": "A", "date": "2025-04-11T09:30:00Z", "location": "Lab"},
                {"id": 3, "title": "C", "date": "2025-04-12T09:30:00Z", "location": "Gym"}
            ]),
        )
        .await;

        let api = api(server.uri());
        let mut list = EventList::new();
        list.mount(&api).await;
        list.mount(&api).await;

        assert!(!list.is_loading());
        assert_eq!(list.count(), 3);
        assert_eq!(list.cards().len(), 3);
        let titles: Vec<_> = list.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
        assert_eq!(list.find("2").map(|e| e.title.as_str()), Some("A"));
        assert!(list.find("9").is_none());
    }

    #[tokio::test]
    async fn empty_and_failed_fetches_look_the_same() {
        let server = MockServer::start().await;
        serve_events(&server, json!([])).await;
        let mut empty = EventList::new();
        empty.mount(&api(server.uri())).await;

        // Nothing listens on port 1, so the request fails to connect.
        let mut failed = EventList::new();
        failed.mount(&api("http://127.0.0.1:1".into())).await;

        for list in [&empty, &failed] {
            assert!(!list.is_loading());
            assert!(list.is_empty());
        }
    }

    #[tokio::test]
    async fn error_object_is_treated_as_empty() {
        let server = MockServer::start().await;
        serve_events(&server, json!({"detail": "database unavailable"})).await;
        let mut list = EventList::new();
        list.mount(&api(server.uri())).await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn reload_fetches_again() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let api = api(server.uri());
        let mut list = EventList::new();
        list.mount(&api).await;
        list.reload();
        assert!(list.is_loading());
        list.mount(&api).await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn one_odd_event_keeps_the_others() {
        let server = MockServer::start().await;
        serve_events(
            &server,
            json!([
                {"id": 1, "title": "Hackathon", "date": "2025-04-10T09:30:00Z", "location": "Lab 3", "capacity": 50},
                {"id": 2, "title": "Quiz Night", "date": "2025-04-11T18:00:00Z", "location": "Cafe", "capacity": 50.5}
            ]),
        )
        .await;

        let mut list = EventList::new();
        list.mount(&api(server.uri())).await;
        assert_eq!(list.count(), 2);
        assert_eq!(list.find("1").and_then(|e| e.capacity), Some(50));
        assert_eq!(list.find("2").and_then(|e| e.capacity), None);
    }
}
