pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod query;
pub mod stats;
pub mod store;

pub use pool::DbPool;
pub use query::{Column, VisitQuery};
pub use store::VisitStore;
