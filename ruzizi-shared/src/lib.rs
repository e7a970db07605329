pub mod events;
pub mod pii;

pub use events::WizardEvent;
pub use pii::Masked;
