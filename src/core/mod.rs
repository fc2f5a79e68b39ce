pub mod catalog;
pub mod report;

pub use crate::domain::model::{Assignment, Book, BookRow, Seed};
pub use crate::domain::ports::{Clock, FixedClock, SeedProvider, SystemClock};
pub use crate::utils::error::Result;
