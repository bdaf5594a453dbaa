pub mod calculator;
pub mod checkin;
pub mod checkout;
pub mod current;
pub mod dashboard;
pub mod export;
pub mod log;
pub mod visits;

pub use checkin::{CheckInForm, CheckInLogic};
pub use checkout::CheckOutLogic;
pub use current::{CurrentCard, CurrentView, DurationRefresh};
pub use dashboard::{DashboardLogic, DashboardStats, FrequentPolicy};
pub use export::ExportLogic;
