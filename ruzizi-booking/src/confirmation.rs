use crate::draft::BookingDraft;
use rand::Rng;
use ruzizi_core::payment::PaymentMethod;
use serde::{Deserialize, Serialize};

pub const REFERENCE_PREFIX: &str = "RUZ";

/// Placeholder amount rendered when no total was ever computed.
pub const FALLBACK_TOTAL_CENTS: i32 = 120_00;

const FALLBACK_ROOM_NAME: &str = "Standard Room";
const FALLBACK_GUEST_NAME: &str = "Guest";
const FALLBACK_DATE: &str = "TBD";

/// Synthetic booking reference: "RUZ" plus exactly 9 random digits.
/// Collisions are possible and unmitigated; nothing durable is written, so
/// uniqueness is explicitly not an invariant here.
pub fn generate_reference() -> String {
    let number: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{}{:09}", REFERENCE_PREFIX, number)
}

/// What the terminal step renders: whatever the accumulated draft holds,
/// with hard-coded placeholders for anything missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationSummary {
    pub reference: String,
    pub hotel_id: Option<String>,
    pub room_name: String,
    pub room_type: Option<String>,
    pub room_image: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub guest_name: String,
    pub adults: u32,
    pub children: u32,
    pub payment_method: Option<PaymentMethod>,
    pub card_tail: Option<String>,
    pub total_cents: i32,
    pub currency: String,
}

impl ConfirmationSummary {
    pub fn from_draft(draft: &BookingDraft, reference: String) -> Self {
        let or_tbd = |value: &str| {
            if value.is_empty() {
                FALLBACK_DATE.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            reference,
            hotel_id: draft.hotel_id.clone(),
            room_name: draft
                .room
                .as_ref()
                .map(|r| r.room_name.clone())
                .unwrap_or_else(|| FALLBACK_ROOM_NAME.to_string()),
            room_type: draft
                .room
                .as_ref()
                .map(|r| format!("{:?}", r.room_type)),
            room_image: draft.room.as_ref().and_then(|r| r.image_url.clone()),
            check_in: or_tbd(&draft.check_in),
            check_out: or_tbd(&draft.check_out),
            guest_name: draft
                .identity
                .as_ref()
                .map(|i| i.full_name())
                .unwrap_or_else(|| FALLBACK_GUEST_NAME.to_string()),
            adults: draft.adults,
            children: draft.children,
            payment_method: draft.payment.as_ref().map(|p| p.method.clone()),
            card_tail: draft
                .payment
                .as_ref()
                .and_then(|p| p.card_number.as_ref())
                .map(|n| n.last_four()),
            total_cents: draft.total_cents.unwrap_or(FALLBACK_TOTAL_CENTS),
            currency: draft.currency.clone(),
        }
    }
}
