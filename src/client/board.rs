use std::fmt;

use tracing::error;

use crate::client::{ClientError, EventsClient};
use crate::models::{Category, Event, NewEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Work),
        CategoryFilter::Only(Category::Personal),
        CategoryFilter::Only(Category::Other),
    ];

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// Client-side view of the event list.
///
/// Holds whatever the server last returned. Every mutation is followed by a
/// full re-fetch; mutation responses are never merged into the list. A failed
/// call is logged and leaves the list as it was.
pub struct EventBoard {
    client: EventsClient,
    events: Vec<Event>,
    filter: CategoryFilter,
}

impl EventBoard {
    pub fn new(client: EventsClient) -> Self {
        Self {
            client,
            events: Vec::new(),
            filter: CategoryFilter::All,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Events matching the current filter, in server order.
    pub fn visible(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(|e| self.filter.matches(e))
    }

    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.list_events().await {
            Ok(events) => {
                self.events = events;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch events");
                Err(e)
            }
        }
    }

    pub async fn add_event(&mut self, new_event: &NewEvent) -> Result<(), ClientError> {
        if let Err(e) = self.client.create_event(new_event).await {
            error!(error = %e, "Failed to add event");
            return Err(e);
        }
        self.refresh().await
    }

    pub async fn toggle_archive(&mut self, id: u64) -> Result<(), ClientError> {
        if let Err(e) = self.client.toggle_archive(id).await {
            error!(error = %e, id, "Failed to archive event");
            return Err(e);
        }
        self.refresh().await
    }

    pub async fn delete_event(&mut self, id: u64) -> Result<(), ClientError> {
        if let Err(e) = self.client.delete_event(id).await {
            error!(error = %e, id, "Failed to delete event");
            return Err(e);
        }
        self.refresh().await
    }
}
