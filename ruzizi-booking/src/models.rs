use crate::draft::{GuestDetail, RoomChoice};
use chrono::{DateTime, Utc};
use ruzizi_core::payment::PaymentMethod;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// The confirmed reservation, only constructible from a draft that holds
/// every required step output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub reference: String,
    pub hotel_id: String,
    pub room: RoomChoice,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: u32,
    pub children: u32,
    pub guest_details: Vec<GuestDetail>,
    pub special_requests: Option<String>,
    pub payment_method: PaymentMethod,
    pub total_cents: i32,
    pub currency: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Update booking status
    pub fn update_status(&mut self, new_status: BookingStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    pub fn guest_count(&self) -> u32 {
        self.adults + self.children
    }
}
