//! In-memory risk collection backing the HTTP service.
//!
//! Nothing is written to disk; the collection lives as long as the process.

pub mod repositories;

pub use repositories::RiskRepository;
