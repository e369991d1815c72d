use crate::api::event::Event;
use crate::views::dates;

/// Summary card for one event. Pure presentation.
pub struct EventCard<'a> {
    event: &'a Event,
}

impl<'a> EventCard<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self { event }
    }

    pub fn title(&self) -> &str {
        &self.event.title
    }

    pub fn date(&self) -> String {
        dates::date_label(&self.event.date)
    }

    pub fn description(&self) -> &str {
        match self.event.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "No description",
        }
    }

    pub fn location(&self) -> &str {
        &self.event.location
    }

    /// Seat count, omitted when the event has no (or zero) capacity.
    pub fn capacity(&self) -> Option<u32> {
        self.event.capacity.filter(|c| *c > 0)
    }

    pub fn tags(&self) -> &[String] {
        self.event.tags.as_deref().unwrap_or_default()
    }

    /// Link which selects this event and opens the registration modal.
    pub fn select_href(&self) -> String {
        format!("/?event={}#register-modal", self.event.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::event::EventId;

    fn event() -> Event {
        Event {
            id: EventId::Number(4),
            title: "Robotics Workshop".into(),
            description: None,
            date: "2025-04-10T09:30:00Z".into(),
            location: "Lab 2".into(),
            capacity: None,
            tags: None,
        }
    }

    #[test]
    fn absent_fields_fall_back() {
        let ev = event();
        let card = EventCard::new(&ev);
        assert_eq!(card.description(), "No description");
        assert_eq!(card.capacity(), None);
        assert!(card.tags().is_empty());
        assert_eq!(card.date(), "4/10/2025");
    }

    #[test]
    fn present_fields_are_shown() {
        let ev = Event {
            description: Some("Build a line follower".into()),
            capacity: Some(40),
            tags: Some(vec!["hardware".into(), "beginner".into()]),
            ..event()
        };
        let card = EventCard::new(&ev);
        assert_eq!(card.description(), "Build a line follower");
        assert_eq!(card.capacity(), Some(40));
        assert_eq!(card.tags(), ["hardware", "beginner"]);
        assert_eq!(card.select_href(), "/?event=4#register-modal");
    }

    #[test]
    fn empty_description_uses_placeholder() {
        let ev = Event { description: Some(String::new()), ..event() };
        assert_eq!(EventCard::new(&ev).description(), "No description");
    }
}
