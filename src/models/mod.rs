pub mod day_entry;
pub mod day_summary;
pub mod driver;
pub mod record;
