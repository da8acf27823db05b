//! Services module
//!
//! Business logic services that coordinate between the HTTP surface and
//! the record store.

pub mod daily;
pub mod papers;
pub mod weekly;

pub use daily::DailyService;
pub use papers::PapersService;
pub use weekly::WeeklyService;
