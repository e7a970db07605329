use serde::Deserialize;
use std::collections::HashMap;

/// Key under which the "book now" widget seeds booking intent before
/// navigating into the wizard.
pub const BOOKING_INTENT_KEY: &str = "ruzizi.booking_intent";

/// Read-only key-value lookup with page-session lifetime. The wizard takes
/// this as an injected dependency instead of reaching for an ambient
/// global, so bootstrap behavior is deterministic under test.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Session store backed by a plain map. Stands in for browser session
/// storage; never written back by the wizard.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: HashMap<String, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value the way the upstream widget would before navigation.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Pre-seeded booking intent as written by the upstream widget.
/// Wire format is camelCase JSON: {"hotelId": "hotel-2", "guests": {...}}.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingIntent {
    pub hotel_id: Option<String>,
    pub guests: Option<GuestCounts>,
    pub dates: Option<StayDates>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GuestCounts {
    pub adults: Option<u32>,
    pub children: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StayDates {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// One-time bootstrap read. A missing key and malformed content are not
/// distinguished to the caller; both mean "no prior intent".
pub fn read_booking_intent(store: &dyn SessionStore) -> Option<BookingIntent> {
    let raw = store.get(BOOKING_INTENT_KEY)?;
    match serde_json::from_str::<BookingIntent>(&raw) {
        Ok(intent) => Some(intent),
        Err(err) => {
            tracing::debug!("Discarding malformed booking intent: {}", err);
            None
        }
    }
}
