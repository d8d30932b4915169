//! Service layer: guarded access to the filter core.

pub mod filter_service;

pub use filter_service::FilterService;
