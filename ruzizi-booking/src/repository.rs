use crate::models::{Booking, BookingStatus};
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for booking data access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save_booking(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get_booking(
        &self,
        id: Uuid,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_bookings(
        &self,
        hotel_id: Option<&str>,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
