use serde::{Deserialize, Serialize};

/// A fully drained response, plus the metadata the server sent alongside it.
///
/// The status code is recorded but never used to decide success: a 404 or 500
/// whose body arrived intact is still a complete fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: String,
}
