use ruzizi_booking::identity::IdentityForm;
use ruzizi_booking::payment_form::PaymentForm;
use ruzizi_booking::wizard::{BookingWizard, StepLabel, WizardError};
use ruzizi_booking::BookingStatus;
use ruzizi_catalog::{PricingEngine, RoomCatalog, RoomInventory};
use ruzizi_core::payment::{MockPaymentAdapter, PaymentMethod};
use ruzizi_core::session::{InMemorySessionStore, BOOKING_INTENT_KEY};
use std::sync::Arc;
use uuid::Uuid;

fn seeded_session() -> InMemorySessionStore {
    let mut store = InMemorySessionStore::new();
    store.seed(
        BOOKING_INTENT_KEY,
        r#"{"hotelId": "hotel-2", "guests": {"adults": 3}, "dates": {"checkIn": "2026-09-01", "checkOut": "2026-09-04"}}"#,
    );
    store
}

fn wizard(store: &InMemorySessionStore) -> BookingWizard {
    BookingWizard::new(
        store,
        RoomCatalog::with_sample_rooms(),
        PricingEngine::default(),
        Arc::new(MockPaymentAdapter),
    )
}

fn valid_identity() -> IdentityForm {
    IdentityForm {
        first_name: "Aline".to_string(),
        last_name: "Uwase".to_string(),
        email: "aline@example.com".to_string(),
        phone: "+250788123456".to_string(),
        country: "RW".to_string(),
        ..IdentityForm::default()
    }
}

#[tokio::test]
async fn test_full_booking_flow() {
    let store = seeded_session();
    let mut wizard = wizard(&store);

    // Session bootstrap folded into the initial draft
    assert_eq!(wizard.draft().hotel_id.as_deref(), Some("hotel-2"));
    assert_eq!(wizard.draft().adults, 3);
    assert_eq!(wizard.draft().check_in, "2026-09-01");
    assert_eq!(wizard.current_step(), StepLabel::Identity);

    wizard.submit_identity(valid_identity()).unwrap();
    assert_eq!(wizard.current_step(), StepLabel::Selection);

    // Offered slice is capped and narrowed to the intent's hotel
    let offered = wizard.offered_rooms();
    assert!(!offered.is_empty() && offered.len() <= 4);
    assert!(offered.iter().all(|r| r.hotel_id == "hotel-2"));

    let (room_id, room_name, nightly_rate) = {
        let room = offered[0];
        (room.id, room.name.clone(), room.nightly_rate_cents)
    };
    wizard.select_room(room_id).unwrap();

    // Selection snapshot carries id, name, type, price and first image,
    // and earlier fields survive the merge untouched
    let draft = wizard.draft();
    let choice = draft.room.as_ref().unwrap();
    assert_eq!(choice.room_id, room_id);
    assert_eq!(choice.room_name, room_name);
    assert_eq!(choice.nightly_rate_cents, nightly_rate);
    assert!(choice.image_url.is_some());
    assert_eq!(draft.identity.as_ref().unwrap().first_name, "Aline");
    assert_eq!(draft.hotel_id.as_deref(), Some("hotel-2"));
    assert!(draft.total_cents.unwrap() > nightly_rate); // 3 nights + tax + fee

    // Terms gate blocks the payment step regardless of method
    let mut form = PaymentForm::new(PaymentMethod::Card);
    form.enter_card_number("4111111111111111");
    assert_eq!(form.card_number, "4111 1111 1111 1111");
    form.enter_expiry("1227");
    form.enter_cvc("123");
    form.card_holder = "Aline Uwase".to_string();

    let err = wizard.submit_payment(form.clone()).await.unwrap_err();
    assert!(matches!(err, WizardError::Payment(_)));
    assert_eq!(wizard.current_step(), StepLabel::Payment);

    form.accept_terms();
    wizard.submit_payment(form).await.unwrap();
    assert_eq!(wizard.current_step(), StepLabel::Confirmation);
    assert!(wizard.draft().payment.as_ref().unwrap().completed);

    let (summary, booking) = wizard.confirm().unwrap();

    // Reference: "RUZ" + exactly 9 digits (uniqueness is not asserted)
    assert_eq!(summary.reference.len(), 12);
    assert!(summary.reference.starts_with("RUZ"));
    assert!(summary.reference[3..].chars().all(|c| c.is_ascii_digit()));

    assert_eq!(summary.guest_name, "Aline Uwase");
    assert_eq!(summary.card_tail.as_deref(), Some("**** **** **** 1111"));
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.reference, summary.reference);
    assert_eq!(booking.hotel_id, "hotel-2");
    assert_eq!(booking.adults, 3);
}

#[tokio::test]
async fn test_defaults_without_session_intent() {
    let store = InMemorySessionStore::new();
    let wizard = wizard(&store);

    assert_eq!(wizard.draft().adults, 2);
    assert_eq!(wizard.draft().children, 0);
    assert_eq!(wizard.draft().check_in, "");
    assert_eq!(wizard.draft().check_out, "");
    assert!(wizard.draft().hotel_id.is_none());
    assert!(wizard.events().is_empty());
}

#[tokio::test]
async fn test_steps_cannot_run_out_of_order() {
    let store = seeded_session();
    let mut wizard = wizard(&store);

    // Selection before identity
    let err = wizard.select_room(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, WizardError::StepNotCurrent { .. }));

    // Payment before identity
    let mut form = PaymentForm::new(PaymentMethod::MobileMoney);
    form.accept_terms();
    let err = wizard.submit_payment(form).await.unwrap_err();
    assert!(matches!(err, WizardError::StepNotCurrent { .. }));

    // Confirm before anything
    assert!(matches!(
        wizard.confirm().unwrap_err(),
        WizardError::StepNotCurrent { .. }
    ));
}

#[tokio::test]
async fn test_unoffered_room_rejected() {
    let store = seeded_session();
    let mut wizard = wizard(&store);
    wizard.submit_identity(valid_identity()).unwrap();

    let err = wizard.select_room(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, WizardError::RoomNotOffered(_)));
}

#[tokio::test]
async fn test_invalid_identity_blocks_step() {
    let store = seeded_session();
    let mut wizard = wizard(&store);

    let mut form = valid_identity();
    form.email = "not-an-email".to_string();

    assert!(matches!(
        wizard.submit_identity(form).unwrap_err(),
        WizardError::Identity(_)
    ));
    assert_eq!(wizard.current_step(), StepLabel::Identity);
    assert!(wizard.draft().identity.is_none());
}

#[tokio::test]
async fn test_going_back_preserves_draft() {
    let store = seeded_session();
    let mut wizard = wizard(&store);

    wizard.submit_identity(valid_identity()).unwrap();
    let room_id = wizard.offered_rooms()[0].id;
    wizard.select_room(room_id).unwrap();

    wizard.go_back().unwrap();
    assert_eq!(wizard.current_step(), StepLabel::Selection);
    assert!(wizard.draft().room.is_some());
    assert!(wizard.draft().identity.is_some());
}

#[tokio::test]
async fn test_reselecting_own_held_room_after_going_back() {
    let store = seeded_session();

    // One unit everywhere: the wizard's own hold exhausts the stock.
    let catalog = RoomCatalog::with_sample_rooms();
    let mut inventory = RoomInventory::new();
    for room in catalog.rooms() {
        inventory.initialize(room.id, 1);
    }

    let mut wizard = BookingWizard::new(
        &store,
        catalog,
        PricingEngine::default(),
        Arc::new(MockPaymentAdapter),
    )
    .with_inventory(inventory);

    wizard.submit_identity(valid_identity()).unwrap();
    let room_id = wizard.offered_rooms()[0].id;
    wizard.select_room(room_id).unwrap();

    wizard.go_back().unwrap();
    wizard.select_room(room_id).unwrap();
    assert_eq!(wizard.current_step(), StepLabel::Payment);

    // Exactly one hold survives the round trip
    let stock = wizard.inventory().unwrap().get(&room_id).unwrap();
    assert_eq!(stock.reserved_units, 1);
    assert_eq!(stock.available_units, 0);
}

#[tokio::test]
async fn test_confirm_is_single_shot() {
    let store = seeded_session();
    let mut wizard = wizard(&store);

    wizard.submit_identity(valid_identity()).unwrap();
    let room_id = wizard.offered_rooms()[0].id;
    wizard.select_room(room_id).unwrap();

    let mut form = PaymentForm::new(PaymentMethod::MobileMoney);
    form.accept_terms();
    wizard.submit_payment(form).await.unwrap();

    let (_, booking) = wizard.confirm().unwrap();
    assert!(matches!(
        wizard.confirm().unwrap_err(),
        WizardError::AlreadyConfirmed
    ));
    assert_eq!(booking.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn test_inventory_hold_commits_on_confirm() {
    let store = seeded_session();

    let catalog = RoomCatalog::with_sample_rooms();
    let mut inventory = RoomInventory::new();
    for room in catalog.rooms() {
        inventory.initialize(room.id, 2);
    }

    let mut wizard = BookingWizard::new(
        &store,
        catalog,
        PricingEngine::default(),
        Arc::new(MockPaymentAdapter),
    )
    .with_inventory(inventory);

    wizard.submit_identity(valid_identity()).unwrap();
    let room_id = wizard.offered_rooms()[0].id;
    wizard.select_room(room_id).unwrap();

    let stock = wizard.inventory().unwrap().get(&room_id).unwrap();
    assert_eq!(stock.reserved_units, 1);
    assert_eq!(stock.available_units, 1);

    let mut form = PaymentForm::new(PaymentMethod::Paypal);
    form.accept_terms();
    wizard.submit_payment(form).await.unwrap();
    wizard.confirm().unwrap();

    let stock = wizard.inventory().unwrap().get(&room_id).unwrap();
    assert_eq!(stock.reserved_units, 0);
    assert_eq!(stock.available_units, 1);
}
