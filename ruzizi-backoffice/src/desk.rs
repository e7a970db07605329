use ruzizi_booking::{Booking, BookingStatus};
use std::collections::HashMap;
use uuid::Uuid;

/// Manages booking lifecycle for the admin panel
pub struct BookingDesk {
    bookings: HashMap<Uuid, Booking>,
}

impl BookingDesk {
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
        }
    }

    /// Register a booking confirmed by the wizard
    pub fn register(&mut self, booking: Booking) -> Result<(), DeskError> {
        if self.bookings.contains_key(&booking.id) {
            return Err(DeskError::AlreadyRegistered(booking.id.to_string()));
        }
        tracing::debug!("Registered booking {} at the desk", booking.reference);
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    pub fn get(&self, booking_id: &Uuid) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    pub fn find_by_reference(&self, reference: &str) -> Option<&Booking> {
        self.bookings.values().find(|b| b.reference == reference)
    }

    pub fn list(&self) -> Vec<&Booking> {
        let mut bookings: Vec<&Booking> = self.bookings.values().collect();
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        bookings
    }

    pub fn by_status(&self, status: &BookingStatus) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| &b.status == status)
            .collect()
    }

    pub fn by_hotel(&self, hotel_id: &str) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| b.hotel_id == hotel_id)
            .collect()
    }

    /// Transition: Confirmed -> CheckedIn (guest arrived)
    pub fn check_in(&mut self, booking_id: &Uuid) -> Result<(), DeskError> {
        let booking = self.get_mut(booking_id)?;

        if booking.status != BookingStatus::Confirmed {
            return Err(DeskError::InvalidTransition {
                from: format!("{:?}", booking.status),
                to: "CHECKED_IN".to_string(),
            });
        }

        booking.update_status(BookingStatus::CheckedIn);
        Ok(())
    }

    /// Transition: CheckedIn -> CheckedOut (stay complete)
    pub fn check_out(&mut self, booking_id: &Uuid) -> Result<(), DeskError> {
        let booking = self.get_mut(booking_id)?;

        if booking.status != BookingStatus::CheckedIn {
            return Err(DeskError::InvalidTransition {
                from: format!("{:?}", booking.status),
                to: "CHECKED_OUT".to_string(),
            });
        }

        booking.update_status(BookingStatus::CheckedOut);
        Ok(())
    }

    /// Cancel a booking (any status except CheckedOut/Cancelled)
    pub fn cancel(&mut self, booking_id: &Uuid) -> Result<(), DeskError> {
        let booking = self.get_mut(booking_id)?;

        if matches!(
            booking.status,
            BookingStatus::CheckedOut | BookingStatus::Cancelled
        ) {
            return Err(DeskError::InvalidTransition {
                from: format!("{:?}", booking.status),
                to: "CANCELLED".to_string(),
            });
        }

        booking.update_status(BookingStatus::Cancelled);
        Ok(())
    }

    fn get_mut(&mut self, booking_id: &Uuid) -> Result<&mut Booking, DeskError> {
        self.bookings
            .get_mut(booking_id)
            .ok_or_else(|| DeskError::NotFound(booking_id.to_string()))
    }
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Booking already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruzizi_booking::RoomChoice;
    use ruzizi_catalog::RoomType;
    use ruzizi_core::payment::PaymentMethod;

    fn booking(hotel_id: &str) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            reference: "RUZ987654321".to_string(),
            hotel_id: hotel_id.to_string(),
            room: RoomChoice {
                room_id: Uuid::new_v4(),
                hotel_id: hotel_id.to_string(),
                room_name: "City Double".to_string(),
                room_type: RoomType::Double,
                nightly_rate_cents: 95_00,
                image_url: None,
            },
            guest_name: "Eric Mugisha".to_string(),
            guest_email: "eric@example.com".to_string(),
            check_in: "2026-09-10".to_string(),
            check_out: "2026-09-12".to_string(),
            adults: 2,
            children: 1,
            guest_details: Vec::new(),
            special_requests: None,
            payment_method: PaymentMethod::MobileMoney,
            total_cents: 229_20,
            currency: "USD".to_string(),
            status: BookingStatus::Confirmed,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut desk = BookingDesk::new();
        let b = booking("hotel-1");
        let id = b.id;

        desk.register(b).unwrap();

        desk.check_in(&id).unwrap();
        assert_eq!(desk.get(&id).unwrap().status, BookingStatus::CheckedIn);

        desk.check_out(&id).unwrap();
        assert_eq!(desk.get(&id).unwrap().status, BookingStatus::CheckedOut);
    }

    #[test]
    fn test_invalid_transition() {
        let mut desk = BookingDesk::new();
        let b = booking("hotel-1");
        let id = b.id;
        desk.register(b).unwrap();

        // Cannot check out before checking in
        assert!(desk.check_out(&id).is_err());
    }

    #[test]
    fn test_cancel_after_checkout_rejected() {
        let mut desk = BookingDesk::new();
        let b = booking("hotel-1");
        let id = b.id;
        desk.register(b).unwrap();

        desk.check_in(&id).unwrap();
        desk.check_out(&id).unwrap();
        assert!(desk.cancel(&id).is_err());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut desk = BookingDesk::new();
        let b = booking("hotel-1");
        let dup = b.clone();

        desk.register(b).unwrap();
        assert!(matches!(
            desk.register(dup),
            Err(DeskError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn test_filters() {
        let mut desk = BookingDesk::new();
        desk.register(booking("hotel-1")).unwrap();
        desk.register(booking("hotel-2")).unwrap();

        assert_eq!(desk.by_hotel("hotel-2").len(), 1);
        assert_eq!(desk.by_status(&BookingStatus::Confirmed).len(), 2);
        assert_eq!(desk.list().len(), 2);
    }
}
