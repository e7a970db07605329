pub mod app_config;
pub mod memory_repo;

pub use app_config::{BusinessRules, Config};
pub use memory_repo::InMemoryBookingRepository;
