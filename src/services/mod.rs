pub mod date_service;

pub use date_service::{DateService, MAX_RANGE_DAYS, NBA_FOUNDED_YEAR};
