pub mod emotion;
pub mod filters;
pub mod grade;
pub mod visit;

pub use emotion::Emotion;
pub use filters::{DateWindow, HistoryFilters};
pub use grade::GradeLevel;
pub use visit::{NewVisit, Visit};
