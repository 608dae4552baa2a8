pub mod categorizer;

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Category, Event, NewEvent};

pub use categorizer::categorize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Title, date, and time are required.")]
    MissingFields,

    #[error("Event not found.")]
    NotFound(u64),
}

/// In-memory event collection plus the id counter.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Store preloaded with the demo events shipped with the app.
    pub fn with_sample_events() -> Self {
        let events: Vec<Event> = SAMPLE_EVENTS
            .iter()
            .zip(1u64..)
            .map(|(sample, id)| sample.to_event(id))
            .collect();
        let next_id = events.len() as u64 + 1;
        info!(count = events.len(), "Seeded sample events");

        Self { events, next_id }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// All events ordered by date and time. Ties keep insertion order;
    /// events with an unparseable date or time go last.
    pub fn list(&self) -> Vec<Event> {
        let mut sorted = self.events.clone();
        sorted.sort_by_cached_key(|e| match e.starts_at() {
            Some(at) => (false, Some(at)),
            None => (true, None),
        });
        sorted
    }

    pub fn create(&mut self, new_event: NewEvent) -> Result<Event, StoreError> {
        let NewEvent {
            title,
            date,
            time,
            notes,
        } = new_event;

        let (title, date, time) = match (non_empty(title), non_empty(date), non_empty(time)) {
            (Some(title), Some(date), Some(time)) => (title, date, time),
            _ => return Err(StoreError::MissingFields),
        };

        let category = categorize(&title, notes.as_deref());
        let id = self.next_id;
        self.next_id += 1;

        let event = Event {
            id,
            title,
            date,
            time,
            notes,
            category,
            archived: false,
        };
        self.events.push(event.clone());

        info!(id, category = %category, "Event created");
        Ok(event)
    }

    pub fn toggle_archive(&mut self, id: u64) -> Result<Event, StoreError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;

        event.archived = !event.archived;
        debug!(id, archived = event.archived, "Event archive flag toggled");
        Ok(event.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.events.remove(index);
        info!(id, "Event deleted");
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

struct SampleEvent {
    title: &'static str,
    date: &'static str,
    time: &'static str,
    notes: &'static str,
    category: Category,
    archived: bool,
}

impl SampleEvent {
    fn to_event(&self, id: u64) -> Event {
        Event {
            id,
            title: self.title.to_string(),
            date: self.date.to_string(),
            time: self.time.to_string(),
            notes: Some(self.notes.to_string()),
            category: self.category,
            archived: self.archived,
        }
    }
}

const SAMPLE_EVENTS: [SampleEvent; 6] = [
    SampleEvent {
        title: "Q3 Project Kick-off Meeting",
        date: "2025-07-22",
        time: "10:00",
        notes: "Finalize the project scope and assign initial tasks.",
        category: Category::Work,
        archived: false,
    },
    SampleEvent {
        title: "Alex's Birthday Party",
        date: "2025-07-26",
        time: "19:00",
        notes: "Don't forget to buy a gift!",
        category: Category::Personal,
        archived: false,
    },
    SampleEvent {
        title: "Renew Car Insurance",
        date: "2025-07-24",
        time: "14:30",
        notes: "Check for better quotes online first.",
        category: Category::Other,
        archived: false,
    },
    SampleEvent {
        title: "Client Presentation Prep",
        date: "2025-08-01",
        time: "11:00",
        notes: "Review the slides with the design team.",
        category: Category::Work,
        archived: false,
    },
    SampleEvent {
        title: "Dentist Appointment",
        date: "2025-07-15",
        time: "09:30",
        notes: "Routine check-up. All good.",
        category: Category::Personal,
        archived: true,
    },
    SampleEvent {
        title: "Submit Q2 Project Report",
        date: "2025-07-18",
        time: "17:00",
        notes: "Report submitted to management.",
        category: Category::Work,
        archived: true,
    },
];
