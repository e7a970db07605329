use serde::{Deserialize, Serialize};

/// A property in the chain. Identified by a stable slug ("hotel-1") because
/// that is what the marketing site and the booking-intent payload carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub rating: f32,
    pub description: Option<String>,
    pub images: Vec<String>,
}

/// The chain's properties. Sample data only; there is no hotel database.
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "hotel-1".to_string(),
            name: "Ruzizi Kigali City".to_string(),
            city: "Kigali".to_string(),
            country: "RW".to_string(),
            rating: 4.6,
            description: Some("Flagship property in the Kigali business district.".to_string()),
            images: vec!["/img/hotels/kigali-1.jpg".to_string()],
        },
        Hotel {
            id: "hotel-2".to_string(),
            name: "Ruzizi Lake Kivu Resort".to_string(),
            city: "Rubavu".to_string(),
            country: "RW".to_string(),
            rating: 4.8,
            description: Some("Lakeside resort with private beach access.".to_string()),
            images: vec![
                "/img/hotels/kivu-1.jpg".to_string(),
                "/img/hotels/kivu-2.jpg".to_string(),
            ],
        },
        Hotel {
            id: "hotel-3".to_string(),
            name: "Ruzizi Volcanoes Lodge".to_string(),
            city: "Musanze".to_string(),
            country: "RW".to_string(),
            rating: 4.4,
            description: Some("Gateway lodge for Volcanoes National Park.".to_string()),
            images: vec!["/img/hotels/musanze-1.jpg".to_string()],
        },
    ]
}
