use chrono::Utc;
use ruzizi_booking::{Booking, BookingStatus};
use ruzizi_catalog::{RoomCatalog, RoomInventory};
use serde::Serialize;

/// Aggregated occupancy for one hotel.
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyReport {
    pub hotel_id: String,
    pub tracked_rooms: usize,
    pub total_units: i32,
    pub available_units: i32,
    pub offline_units: i32,
    pub utilization: f64,
}

/// Read-only report computations over in-memory state
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Occupancy per hotel from the availability ledger.
    pub fn occupancy(
        &self,
        hotel_id: &str,
        catalog: &RoomCatalog,
        inventory: &RoomInventory,
    ) -> OccupancyReport {
        let mut tracked_rooms = 0;
        let mut total_units = 0;
        let mut available_units = 0;
        let mut offline_units = 0;

        for room in catalog.by_hotel(hotel_id) {
            if let Some(stock) = inventory.get(&room.id) {
                tracked_rooms += 1;
                total_units += stock.total_units;
                available_units += stock.available_units;
                offline_units += stock.offline_units;
            }
        }

        let utilization = if total_units == 0 {
            0.0
        } else {
            1.0 - (available_units as f64 / total_units as f64)
        };

        OccupancyReport {
            hotel_id: hotel_id.to_string(),
            tracked_rooms,
            total_units,
            available_units,
            offline_units,
            utilization,
        }
    }

    /// Revenue summary for a month ("2026-09"), counting bookings whose
    /// check-in falls in that month and that were not cancelled.
    pub fn revenue(&self, month: &str, bookings: &[Booking]) -> serde_json::Value {
        let mut gross_cents: i64 = 0;
        let mut booking_count = 0;
        let mut cancelled_count = 0;

        for booking in bookings {
            if !booking.check_in.starts_with(month) {
                continue;
            }
            if booking.status == BookingStatus::Cancelled {
                cancelled_count += 1;
                continue;
            }
            booking_count += 1;
            gross_cents += i64::from(booking.total_cents);
        }

        serde_json::json!({
            "month": month,
            "report_date": Utc::now().to_rfc3339(),
            "metrics": {
                "bookings": booking_count,
                "cancelled": cancelled_count,
                "gross_cents": gross_cents,
            }
        })
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
