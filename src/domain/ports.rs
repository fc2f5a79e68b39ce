use crate::domain::model::Seed;
use chrono::NaiveDate;

/// Source of "today" for due date arithmetic.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub trait SeedProvider {
    fn library_name(&self) -> &str;
    fn seed(&self) -> Seed;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
