use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct IntentCapturedEvent {
    pub hotel_id: Option<String>,
    pub adults: u32,
    pub children: u32,
    pub captured_at: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct StepCompletedEvent {
    pub step: String,
    pub completed_at: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct RoomSelectedEvent {
    pub room_id: Uuid,
    pub hotel_id: String,
    pub nightly_rate_cents: i32,
    pub selected_at: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub reference: String,
    pub total_cents: i32,
    pub confirmed_at: i64,
}

/// Audit trail entries recorded by the wizard across its transitions.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardEvent {
    IntentCaptured(IntentCapturedEvent),
    StepCompleted(StepCompletedEvent),
    RoomSelected(RoomSelectedEvent),
    BookingConfirmed(BookingConfirmedEvent),
}
