//! Shared query parameter types for dashboard handlers.

use serde::Deserialize;

/// `?page=` for paginated lists.
///
/// Kept as a raw string so a non-numeric value falls back to the first page
/// instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// `?redirect_url=` accepted by the edit and delete handlers.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectParams {
    pub redirect_url: Option<String>,
}
