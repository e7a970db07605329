use async_trait::async_trait;
use ruzizi_booking::repository::BookingRepository;
use ruzizi_booking::{Booking, BookingStatus};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Booking store with page-session lifetime. Nothing here survives the
/// process; durable storage is out of scope for this system.
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.bookings.read().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save_booking(&self, booking: &Booking) -> Result<(), RepoError> {
        let mut bookings = self
            .bookings
            .write()
            .map_err(|_| "booking store lock poisoned".to_string())?;
        bookings.insert(booking.id, booking.clone());
        tracing::debug!("Stored booking {} ({})", booking.id, booking.reference);
        Ok(())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, RepoError> {
        let bookings = self
            .bookings
            .read()
            .map_err(|_| "booking store lock poisoned".to_string())?;
        Ok(bookings.get(&id).cloned())
    }

    async fn list_bookings(&self, hotel_id: Option<&str>) -> Result<Vec<Booking>, RepoError> {
        let bookings = self
            .bookings
            .read()
            .map_err(|_| "booking store lock poisoned".to_string())?;
        let mut result: Vec<Booking> = bookings
            .values()
            .filter(|b| hotel_id.map_or(true, |h| b.hotel_id == h))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(result)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<(), RepoError> {
        let mut bookings = self
            .bookings
            .write()
            .map_err(|_| "booking store lock poisoned".to_string())?;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| format!("booking not found: {}", id))?;
        booking.update_status(status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruzizi_booking::RoomChoice;
    use ruzizi_catalog::RoomType;
    use ruzizi_core::payment::PaymentMethod;

    fn sample_booking(hotel_id: &str) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            reference: "RUZ123456789".to_string(),
            hotel_id: hotel_id.to_string(),
            room: RoomChoice {
                room_id: Uuid::new_v4(),
                hotel_id: hotel_id.to_string(),
                room_name: "Lakeview Deluxe".to_string(),
                room_type: RoomType::Deluxe,
                nightly_rate_cents: 145_00,
                image_url: None,
            },
            guest_name: "Aline Uwase".to_string(),
            guest_email: "aline@example.com".to_string(),
            check_in: "2026-09-01".to_string(),
            check_out: "2026-09-04".to_string(),
            adults: 2,
            children: 0,
            guest_details: Vec::new(),
            special_requests: None,
            payment_method: PaymentMethod::Card,
            total_cents: 518_10,
            currency: "USD".to_string(),
            status: BookingStatus::Confirmed,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_fetch() {
        let repo = InMemoryBookingRepository::new();
        let booking = sample_booking("hotel-2");

        repo.save_booking(&booking).await.unwrap();
        let fetched = repo.get_booking(booking.id).await.unwrap().unwrap();
        assert_eq!(fetched.reference, "RUZ123456789");
    }

    #[tokio::test]
    async fn test_list_filters_by_hotel() {
        let repo = InMemoryBookingRepository::new();
        repo.save_booking(&sample_booking("hotel-1")).await.unwrap();
        repo.save_booking(&sample_booking("hotel-2")).await.unwrap();
        repo.save_booking(&sample_booking("hotel-2")).await.unwrap();

        assert_eq!(repo.list_bookings(None).await.unwrap().len(), 3);
        assert_eq!(
            repo.list_bookings(Some("hotel-2")).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = InMemoryBookingRepository::new();
        let booking = sample_booking("hotel-1");
        repo.save_booking(&booking).await.unwrap();

        repo.update_status(booking.id, BookingStatus::CheckedIn)
            .await
            .unwrap();
        let fetched = repo.get_booking(booking.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, BookingStatus::CheckedIn);

        assert!(repo
            .update_status(Uuid::new_v4(), BookingStatus::Cancelled)
            .await
            .is_err());
    }
}
