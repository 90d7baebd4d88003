pub mod config;
pub mod error;
pub mod ingest;
pub mod portfolio;
pub mod telemetry;
