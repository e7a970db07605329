pub mod hotel;
pub mod inventory;
pub mod pricing;
pub mod room;

pub use hotel::Hotel;
pub use inventory::RoomInventory;
pub use pricing::{PricingConfig, PricingEngine, StayQuote};
pub use room::{Room, RoomCatalog, RoomType};
