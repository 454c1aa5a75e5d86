pub mod coerce;
pub mod ledger;
pub mod sheet;
pub mod summary;
pub mod upsert;

pub use ledger::{Ledger, Report};
