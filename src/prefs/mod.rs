//! Local preferences, kept apart from the visit store.

pub mod recent_staff;

pub use recent_staff::{MAX_RECENT_STAFF, RecentStaff};
