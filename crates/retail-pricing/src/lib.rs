//! Rule-based dynamic pricing for perishable retail catalogs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;
