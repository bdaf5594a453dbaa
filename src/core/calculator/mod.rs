pub mod breakdown;
pub mod duration;
