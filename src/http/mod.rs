//! HTTP transport shim over the filter service.

pub mod router;
pub mod server;
pub mod types;

pub use router::{build_router, AppState};
pub use server::serve;
