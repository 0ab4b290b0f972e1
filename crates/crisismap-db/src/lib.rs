//! Database layer: the lazily-initialized connection handle and the report
//! repository.

pub mod database;
pub mod reports;

pub use database::{Database, DatabaseConfig};
pub use reports::ReportRepository;
