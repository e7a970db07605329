pub mod confirmation;
pub mod draft;
pub mod identity;
pub mod models;
pub mod payment_form;
pub mod repository;
pub mod wizard;

pub use confirmation::ConfirmationSummary;
pub use draft::{BookingDraft, GuestDetail, IdentityDetails, PaymentDetails, RoomChoice};
pub use models::{Booking, BookingStatus};
pub use repository::BookingRepository;
pub use wizard::{BookingWizard, StepLabel, WizardController, WizardError};
