//! Errors that can happen when interacting with the Expeerly API.

use thiserror::Error;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error(transparent)]
    FetchError(#[from] FetchError),
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unexpected(anyhow::Error::from(error))
    }
}

/// The terminal, user-visible outcome of a failed review fetch.
///
/// Every variant's `Display` output is the message the widget renders; nothing
/// here is propagated to the caller as an `Err`. Variants map one-to-one onto
/// the first validation step that failed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FetchError {
    /// The widget was configured with an empty GTIN; no request was made.
    #[error("Missing product identifier")]
    MissingGtin,
    /// The response body was malformed, carried an unsuccessful `status`, or
    /// had no `videos` array.
    #[error("No reviews available")]
    NoReviews,
    /// The payload was well-formed and successful, but the video list was
    /// empty after truncation.
    #[error("No reviews found for this product")]
    NoneForProduct,
    /// The request itself failed: connection error, timeout, or an unreadable
    /// transport response.
    #[error("Error fetching reviews")]
    Network(#[source] ClientError),
}
