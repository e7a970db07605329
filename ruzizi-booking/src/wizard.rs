use crate::confirmation::{self, ConfirmationSummary};
use crate::draft::{BookingDraft, DraftError, DraftStatus, RoomChoice};
use crate::identity::{self, IdentityForm, ValidationFailure};
use crate::models::Booking;
use crate::payment_form::{PaymentForm, PaymentFormError};
use chrono::Utc;
use ruzizi_catalog::{PricingEngine, Room, RoomCatalog, RoomInventory};
use ruzizi_core::payment::{PaymentAdapter, PaymentStatus};
use ruzizi_core::session::{read_booking_intent, SessionStore};
use ruzizi_shared::events::{
    BookingConfirmedEvent, IntentCapturedEvent, RoomSelectedEvent, StepCompletedEvent,
};
use ruzizi_shared::WizardEvent;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// How many rooms the selection step offers.
pub const DEFAULT_SELECTION_LIMIT: usize = 4;

/// Wizard position. The order of the variants is the order of the flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepLabel {
    Identity,
    Selection,
    Payment,
    Confirmation,
}

impl StepLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepLabel::Identity => "identity",
            StepLabel::Selection => "selection",
            StepLabel::Payment => "payment",
            StepLabel::Confirmation => "confirmation",
        }
    }

    pub fn next(&self) -> Option<StepLabel> {
        match self {
            StepLabel::Identity => Some(StepLabel::Selection),
            StepLabel::Selection => Some(StepLabel::Payment),
            StepLabel::Payment => Some(StepLabel::Confirmation),
            StepLabel::Confirmation => None,
        }
    }

    pub fn previous(&self) -> Option<StepLabel> {
        match self {
            StepLabel::Identity => None,
            StepLabel::Selection => Some(StepLabel::Identity),
            StepLabel::Payment => Some(StepLabel::Selection),
            StepLabel::Confirmation => Some(StepLabel::Payment),
        }
    }
}

/// Explicit step sequencer. Only adjacent transitions are allowed;
/// Confirmation is terminal. Jumping to an arbitrary label is rejected
/// instead of trusting the caller.
#[derive(Debug, Clone)]
pub struct WizardController {
    current: StepLabel,
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            current: StepLabel::Identity,
        }
    }

    pub fn current(&self) -> StepLabel {
        self.current
    }

    pub fn advance(&mut self, target: StepLabel) -> Result<(), WizardError> {
        let allowed =
            self.current.next() == Some(target) || self.current.previous() == Some(target);
        if !allowed {
            return Err(WizardError::InvalidTransition {
                from: self.current,
                to: target,
            });
        }
        self.current = target;
        Ok(())
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Invalid step transition from {from:?} to {to:?}")]
    InvalidTransition { from: StepLabel, to: StepLabel },

    #[error("Step {expected:?} is not current (wizard is at {actual:?})")]
    StepNotCurrent {
        expected: StepLabel,
        actual: StepLabel,
    },

    #[error("Room {0} was not offered for selection")]
    RoomNotOffered(Uuid),

    #[error("Room {0} has no availability")]
    RoomUnavailable(Uuid),

    #[error(transparent)]
    Identity(#[from] ValidationFailure),

    #[error(transparent)]
    Payment(#[from] PaymentFormError),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("Payment processing failed: {0}")]
    PaymentProcessing(String),

    #[error("Booking was already confirmed")]
    AlreadyConfirmed,
}

/// Owns the draft and the step sequencer, and carries each step's output
/// into the draft. Session storage and the payment gateway are injected so
/// the whole flow runs deterministically under test.
pub struct BookingWizard {
    controller: WizardController,
    draft: BookingDraft,
    catalog: RoomCatalog,
    inventory: Option<RoomInventory>,
    pricing: PricingEngine,
    payment: Arc<dyn PaymentAdapter>,
    events: Vec<WizardEvent>,
    selection_limit: usize,
    reserved_room: Option<Uuid>,
}

impl BookingWizard {
    /// Mounts the wizard: builds the empty draft and performs the one-time
    /// session bootstrap read.
    pub fn new(
        session: &dyn SessionStore,
        catalog: RoomCatalog,
        pricing: PricingEngine,
        payment: Arc<dyn PaymentAdapter>,
    ) -> Self {
        let mut draft = BookingDraft::new();
        let mut events = Vec::new();

        if let Some(intent) = read_booking_intent(session) {
            draft.hydrate(&intent);
            events.push(WizardEvent::IntentCaptured(IntentCapturedEvent {
                hotel_id: draft.hotel_id.clone(),
                adults: draft.adults,
                children: draft.children,
                captured_at: Utc::now().timestamp(),
            }));
            tracing::info!(
                "Hydrated booking draft {} from session intent (hotel: {:?})",
                draft.draft_id,
                draft.hotel_id
            );
        }

        Self {
            controller: WizardController::new(),
            draft,
            catalog,
            inventory: None,
            pricing,
            payment,
            events,
            selection_limit: DEFAULT_SELECTION_LIMIT,
            reserved_room: None,
        }
    }

    /// Attach an availability ledger. Without one, any offered room can be
    /// selected regardless of stock.
    pub fn with_inventory(mut self, inventory: RoomInventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_selection_limit(mut self, limit: usize) -> Self {
        self.selection_limit = limit;
        self
    }

    pub fn current_step(&self) -> StepLabel {
        self.controller.current()
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn events(&self) -> &[WizardEvent] {
        &self.events
    }

    pub fn inventory(&self) -> Option<&RoomInventory> {
        self.inventory.as_ref()
    }

    /// Move back one step. The draft keeps everything already collected.
    pub fn go_back(&mut self) -> Result<(), WizardError> {
        let current = self.controller.current();
        match current.previous() {
            Some(previous) => self.controller.advance(previous),
            None => Err(WizardError::InvalidTransition {
                from: current,
                to: current,
            }),
        }
    }

    /// Identity step: validate, merge, advance.
    pub fn submit_identity(&mut self, form: IdentityForm) -> Result<(), WizardError> {
        self.ensure_current(StepLabel::Identity)?;

        let guests = form.guest_details.clone();
        let details = identity::validate(&form)?;
        self.draft.set_special_requests(&form.special_requests);
        self.draft.apply_identity(details, guests);

        self.record_step(StepLabel::Identity);
        self.controller.advance(StepLabel::Selection)
    }

    /// The rooms currently offered: the catalog's selection slice, narrowed
    /// further by availability when an inventory is attached.
    pub fn offered_rooms(&self) -> Vec<&Room> {
        let mut rooms = self
            .catalog
            .selection_slice(self.draft.hotel_id.as_deref(), self.selection_limit);
        if let Some(inventory) = &self.inventory {
            rooms.retain(|r| inventory.is_available(&r.id));
        }
        rooms
    }

    /// Selection step: snapshot the chosen room into the draft, price the
    /// stay, hold a unit when stock is tracked, advance.
    pub fn select_room(&mut self, room_id: Uuid) -> Result<(), WizardError> {
        self.ensure_current(StepLabel::Selection)?;

        // A hold from an earlier pass through this step belongs to this
        // draft. Release it before computing the offered slice, otherwise
        // re-selecting the last unit of a room would reject our own hold.
        if let Some(previous) = self.reserved_room.take() {
            if let Some(inventory) = &mut self.inventory {
                let _ = inventory.release(&previous, 1);
            }
        }

        let choice = {
            let offered = self.offered_rooms();
            let room = offered
                .into_iter()
                .find(|r| r.id == room_id)
                .ok_or(WizardError::RoomNotOffered(room_id))?;
            RoomChoice::from_room(room)
        };

        if let Some(inventory) = &mut self.inventory {
            inventory
                .reserve(&room_id, 1)
                .map_err(|_| WizardError::RoomUnavailable(room_id))?;
            self.reserved_room = Some(room_id);
        }

        let total_cents = self
            .pricing
            .quote(
                choice.nightly_rate_cents,
                &self.draft.check_in,
                &self.draft.check_out,
            )
            .map(|q| q.total_cents)
            // No usable dates yet: show one night at the listed rate.
            .unwrap_or(choice.nightly_rate_cents);

        self.events.push(WizardEvent::RoomSelected(RoomSelectedEvent {
            room_id: choice.room_id,
            hotel_id: choice.hotel_id.clone(),
            nightly_rate_cents: choice.nightly_rate_cents,
            selected_at: Utc::now().timestamp(),
        }));

        self.draft.apply_room(choice, total_cents);
        self.record_step(StepLabel::Selection);
        self.controller.advance(StepLabel::Payment)
    }

    /// Payment step: terms gate, then route the amount through the payment
    /// adapter and merge the outcome.
    pub async fn submit_payment(&mut self, form: PaymentForm) -> Result<(), WizardError> {
        self.ensure_current(StepLabel::Payment)?;

        if !form.can_continue() {
            return Err(PaymentFormError::TermsNotAccepted.into());
        }

        let amount_cents = self
            .draft
            .total_cents
            .unwrap_or(confirmation::FALLBACK_TOTAL_CENTS);

        let intent = self
            .payment
            .create_intent(
                self.draft.draft_id,
                amount_cents,
                &self.draft.currency,
                form.method.clone(),
            )
            .await
            .map_err(|e| WizardError::PaymentProcessing(e.to_string()))?;
        let status = self
            .payment
            .process_payment(&intent)
            .await
            .map_err(|e| WizardError::PaymentProcessing(e.to_string()))?;

        let completed = status == PaymentStatus::Succeeded;
        self.draft.apply_payment(form.into_details(completed));

        self.record_step(StepLabel::Payment);
        self.controller.advance(StepLabel::Confirmation)
    }

    /// Terminal step: mint the reference, build the typed booking, commit
    /// the held unit, and render the summary.
    pub fn confirm(&mut self) -> Result<(ConfirmationSummary, Booking), WizardError> {
        self.ensure_current(StepLabel::Confirmation)?;

        if self.draft.status == DraftStatus::Confirmed {
            return Err(WizardError::AlreadyConfirmed);
        }

        let reference = confirmation::generate_reference();
        let booking = self.draft.try_complete(reference.clone())?;

        if let (Some(inventory), Some(room_id)) = (&mut self.inventory, self.reserved_room.take())
        {
            inventory
                .commit(&room_id, 1)
                .map_err(|_| WizardError::RoomUnavailable(room_id))?;
        }

        self.draft.status = DraftStatus::Confirmed;
        self.events
            .push(WizardEvent::BookingConfirmed(BookingConfirmedEvent {
                booking_id: booking.id,
                reference: reference.clone(),
                total_cents: booking.total_cents,
                confirmed_at: Utc::now().timestamp(),
            }));
        tracing::info!(
            "Booking {} confirmed with reference {}",
            booking.id,
            reference
        );

        let summary = ConfirmationSummary::from_draft(&self.draft, reference);
        Ok((summary, booking))
    }

    fn ensure_current(&self, expected: StepLabel) -> Result<(), WizardError> {
        let actual = self.controller.current();
        if actual != expected {
            return Err(WizardError::StepNotCurrent { expected, actual });
        }
        Ok(())
    }

    fn record_step(&mut self, step: StepLabel) {
        self.events
            .push(WizardEvent::StepCompleted(StepCompletedEvent {
                step: step.as_str().to_string(),
                completed_at: Utc::now().timestamp(),
            }));
    }
}
