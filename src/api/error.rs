use std::sync::Arc;

pub(crate) type Result<T> = std::result::Result<T, RequestError>;

/// A page fetch that did not produce a page
///
/// Carried inside UI messages, so the non-`Clone` sources are shared
/// behind an [`Arc`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
    #[error("Request error: {0}")]
    Request(#[source] Arc<reqwest::Error>),

    #[error("API error (status {}): {}", .code, .body)]
    Status { code: u16, body: String },

    #[error("Invalid response body: {0}")]
    Decode(#[source] Arc<serde_json::Error>),

    #[error("client config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(Arc::new(error))
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(Arc::new(error))
    }
}

#[cfg(test)]
impl PartialEq for RequestError {
    fn eq(&self, other: &Self) -> bool {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return false;
        }

        // Good enough for testing purposes
        format!("{self:?}") == format!("{other:?}")
    }
}
