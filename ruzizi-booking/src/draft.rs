use crate::models::{Booking, BookingStatus};
use chrono::Utc;
use ruzizi_catalog::{Room, RoomType};
use ruzizi_core::payment::PaymentMethod;
use ruzizi_core::session::BookingIntent;
use ruzizi_shared::pii::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentificationType {
    Passport,
    NationalId,
    DrivingLicense,
}

/// Per-guest record collected alongside the contact details; the list is
/// sized to the guest count by the caller, nothing enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestDetail {
    pub name: String,
    pub age: u8,
    pub id_type: IdentificationType,
    pub id_number: String,
}

/// Validated output of the identity step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
}

impl IdentityDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Snapshot of the selected room, frozen into the draft at selection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomChoice {
    pub room_id: Uuid,
    pub hotel_id: String,
    pub room_name: String,
    pub room_type: RoomType,
    pub nightly_rate_cents: i32,
    pub image_url: Option<String>,
}

impl RoomChoice {
    pub fn from_room(room: &Room) -> Self {
        Self {
            room_id: room.id,
            hotel_id: room.hotel_id.clone(),
            room_name: room.name.clone(),
            room_type: room.room_type.clone(),
            nightly_rate_cents: room.nightly_rate_cents,
            image_url: room.first_image().map(str::to_string),
        }
    }
}

/// Output of the payment step. Card number and CVC are masked so the draft
/// can be logged without leaking them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub card_number: Option<Masked<String>>,
    pub card_holder: Option<String>,
    pub expiry: Option<String>,
    pub cvc: Option<Masked<String>>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftStatus {
    InProgress,
    Confirmed,
}

/// The reservation under construction. Created once when the wizard mounts,
/// hydrated at most once from session intent, then grown additively: each
/// step's apply writes only the fields that step collects.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDraft {
    pub draft_id: Uuid,
    pub hotel_id: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub adults: u32,
    pub children: u32,
    pub guest_details: Vec<GuestDetail>,
    pub identity: Option<IdentityDetails>,
    pub room: Option<RoomChoice>,
    pub special_requests: Option<String>,
    pub payment: Option<PaymentDetails>,
    pub total_cents: Option<i32>,
    pub currency: String,
    pub status: DraftStatus,
}

pub const DEFAULT_ADULTS: u32 = 2;

impl BookingDraft {
    pub fn new() -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            hotel_id: None,
            check_in: String::new(),
            check_out: String::new(),
            check_in_time: None,
            check_out_time: None,
            adults: DEFAULT_ADULTS,
            children: 0,
            guest_details: Vec::new(),
            identity: None,
            room: None,
            special_requests: None,
            payment: None,
            total_cents: None,
            currency: "USD".to_string(),
            status: DraftStatus::InProgress,
        }
    }

    /// Fold pre-seeded intent into the draft. Called once, before any step
    /// runs; fields absent from the intent keep their defaults.
    pub fn hydrate(&mut self, intent: &BookingIntent) {
        if let Some(hotel_id) = &intent.hotel_id {
            self.hotel_id = Some(hotel_id.clone());
        }
        if let Some(guests) = &intent.guests {
            if let Some(adults) = guests.adults {
                self.adults = adults;
            }
            if let Some(children) = guests.children {
                self.children = children;
            }
        }
        if let Some(dates) = &intent.dates {
            if let Some(check_in) = &dates.check_in {
                self.check_in = check_in.clone();
            }
            if let Some(check_out) = &dates.check_out {
                self.check_out = check_out.clone();
            }
        }
    }

    pub fn apply_identity(&mut self, details: IdentityDetails, guests: Vec<GuestDetail>) {
        self.identity = Some(details);
        if !guests.is_empty() {
            self.guest_details = guests;
        }
    }

    pub fn apply_room(&mut self, choice: RoomChoice, total_cents: i32) {
        if self.hotel_id.is_none() {
            self.hotel_id = Some(choice.hotel_id.clone());
        }
        self.room = Some(choice);
        self.total_cents = Some(total_cents);
    }

    pub fn apply_payment(&mut self, details: PaymentDetails) {
        self.payment = Some(details);
    }

    pub fn set_special_requests(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.special_requests = Some(text.trim().to_string());
        }
    }

    /// Build the typed booking. Only possible once every required step
    /// output is present; the error names the first missing one.
    pub fn try_complete(&self, reference: String) -> Result<Booking, DraftError> {
        let identity = self.identity.as_ref().ok_or(DraftError::MissingStep("identity"))?;
        let room = self.room.as_ref().ok_or(DraftError::MissingStep("selection"))?;
        let payment = self.payment.as_ref().ok_or(DraftError::MissingStep("payment"))?;

        if !payment.completed {
            return Err(DraftError::PaymentIncomplete);
        }

        let now = Utc::now();
        Ok(Booking {
            id: self.draft_id,
            reference,
            hotel_id: self
                .hotel_id
                .clone()
                .unwrap_or_else(|| room.hotel_id.clone()),
            room: room.clone(),
            guest_name: identity.full_name(),
            guest_email: identity.email.clone(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            adults: self.adults,
            children: self.children,
            guest_details: self.guest_details.clone(),
            special_requests: self.special_requests.clone(),
            payment_method: payment.method.clone(),
            total_cents: self.total_cents.unwrap_or(room.nightly_rate_cents),
            currency: self.currency.clone(),
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Draft is missing the {0} step output")]
    MissingStep(&'static str),

    #[error("Payment was not completed")]
    PaymentIncomplete,
}
