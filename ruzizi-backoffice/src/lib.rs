pub mod desk;
pub mod maintenance;
pub mod reports;
pub mod staff;

pub use desk::BookingDesk;
pub use maintenance::MaintenanceLog;
pub use reports::ReportService;
pub use staff::{SalaryLedger, StaffRegistry};
