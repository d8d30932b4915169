//! Request and response payloads for the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/add` and `POST /api/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    pub item: String,
}

/// Response of `POST /api/add`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddResponse {
    pub success: bool,
}

/// Response of `POST /api/check`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckResponse {
    pub exists: bool,
}

/// Response of `POST /api/reset`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
}
