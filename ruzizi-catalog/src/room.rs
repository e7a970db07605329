use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Twin,
    Deluxe,
    Suite,
    Family,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: String,
    pub name: String,
    pub room_type: RoomType,
    pub nightly_rate_cents: i32,
    pub capacity: u32,
    pub images: Vec<String>,
    pub is_active: bool,
}

impl Room {
    /// First image URL, the one the selection step snapshots.
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// In-memory room catalog over the sample arrays.
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn with_sample_rooms() -> Self {
        Self::new(sample_rooms())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: &Uuid) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn by_hotel(&self, hotel_id: &str) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.hotel_id == hotel_id).collect()
    }

    /// The slice offered to the selection step: the first `limit` active
    /// rooms, narrowed to the given hotel when one is known. Without a
    /// hotel the slice spans the whole catalog.
    pub fn selection_slice(&self, hotel_id: Option<&str>, limit: usize) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|r| r.is_active)
            .filter(|r| hotel_id.map_or(true, |h| r.hotel_id == h))
            .take(limit)
            .collect()
    }
}

/// Sample room stock across the three properties. Ids are minted per
/// construction; nothing outlives the session.
pub fn sample_rooms() -> Vec<Room> {
    let room = |hotel_id: &str, name: &str, room_type: RoomType, rate: i32, capacity: u32, img: &str| Room {
        id: Uuid::new_v4(),
        hotel_id: hotel_id.to_string(),
        name: name.to_string(),
        room_type,
        nightly_rate_cents: rate,
        capacity,
        images: vec![img.to_string()],
        is_active: true,
    };

    vec![
        room("hotel-1", "City Single", RoomType::Single, 65_00, 1, "/img/rooms/city-single.jpg"),
        room("hotel-1", "City Double", RoomType::Double, 95_00, 2, "/img/rooms/city-double.jpg"),
        room("hotel-1", "Skyline Suite", RoomType::Suite, 210_00, 3, "/img/rooms/skyline-suite.jpg"),
        room("hotel-2", "Garden Twin", RoomType::Twin, 110_00, 2, "/img/rooms/garden-twin.jpg"),
        room("hotel-2", "Lakeview Deluxe", RoomType::Deluxe, 145_00, 2, "/img/rooms/lakeview-deluxe.jpg"),
        room("hotel-2", "Kivu Family Villa", RoomType::Family, 240_00, 5, "/img/rooms/kivu-villa.jpg"),
        room("hotel-2", "Sunset Suite", RoomType::Suite, 260_00, 3, "/img/rooms/sunset-suite.jpg"),
        room("hotel-2", "Beach Double", RoomType::Double, 130_00, 2, "/img/rooms/beach-double.jpg"),
        room("hotel-3", "Trailhead Double", RoomType::Double, 88_00, 2, "/img/rooms/trailhead-double.jpg"),
        room("hotel-3", "Volcano View Deluxe", RoomType::Deluxe, 120_00, 2, "/img/rooms/volcano-deluxe.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_slice_caps_at_limit() {
        let catalog = RoomCatalog::with_sample_rooms();
        let offered = catalog.selection_slice(None, 4);
        assert_eq!(offered.len(), 4);
    }

    #[test]
    fn test_selection_slice_filters_by_hotel() {
        let catalog = RoomCatalog::with_sample_rooms();
        let offered = catalog.selection_slice(Some("hotel-2"), 4);
        assert!(!offered.is_empty());
        assert!(offered.iter().all(|r| r.hotel_id == "hotel-2"));
    }

    #[test]
    fn test_inactive_rooms_not_offered() {
        let mut rooms = sample_rooms();
        for r in &mut rooms {
            r.is_active = false;
        }
        let catalog = RoomCatalog::new(rooms);
        assert!(catalog.selection_slice(None, 4).is_empty());
    }
}
