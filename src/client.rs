//! Represents a client abstraction for the Expeerly review API.

use crate::errors::{ClientError, FetchError};
use crate::review::Review;
use crate::stdx::http::DEFAULT_USER_AGENT;
use reqwest::Response;
use serde::Deserialize as _;
use serde_json::Value;

const API_URL: &str = "https://app.expeerly.com/api/1.1/wf/get-product-videos-processed/";

// The literal success marker of the API. Must be kept bit-exact.
const STATUS_SUCCESS: &str = "success";

/// A builder for configuring and creating instances of [`Client`] with custom settings.
///
/// The `ClientBuilder` provides an API for fine-tuning aspects of the `Client`
/// configuration, such as custom user agents. It enables a more controlled
/// construction of the `Client` when the default configuration isn't sufficient.
///
/// # Example
///
/// ```
/// # use expeerly::ClientBuilder;
/// let client = ClientBuilder::new()
///     .user_agent("custom-agent/1.0")
///     .build()?;
/// # Ok::<(), expeerly::errors::ClientError>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    builder: reqwest::ClientBuilder,
}

impl Default for ClientBuilder {
    #[must_use]
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    ///
    /// This includes a default user agent (`expeerly/VERSION`), and is the
    /// starting point for configuring a `Client`.
    #[must_use]
    pub fn new() -> Self {
        let builder = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .use_rustls_tls()
            .https_only(true)
            .brotli(true);

        Self { builder }
    }

    /// Sets a custom `User-Agent` header for the [`Client`].
    ///
    /// By default, the user agent is set to `expeerly/VERSION`.
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        Self {
            builder: self.builder.user_agent(user_agent),
        }
    }

    /// Consumes the `ClientBuilder` and returns a fully-configured [`Client`].
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the underlying HTTP client could not be
    /// built, such as when TLS initialization fails or the DNS resolver cannot
    /// load the system configuration.
    pub fn build(self) -> Result<Client, ClientError> {
        Ok(Client {
            http: self
                .builder
                .build()
                .map_err(|err| ClientError::Unexpected(err.into()))?,
        })
    }
}

/// A high-level, asynchronous client for the Expeerly review API.
///
/// The `Client` is designed for efficient, reusable interactions, and
/// internally manages connection pooling. Cloning it is cheap and clones share
/// the same pool, so one `Client` can back any number of widgets.
///
/// # Example
///
/// ```
/// # use expeerly::Client;
/// let client = Client::new();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
}

// Creation impls
impl Client {
    /// Instantiates a new [`Client`] with the default user agent: `expeerly/VERSION`.
    ///
    /// # Panics
    ///
    /// This function will panic if the TLS backend cannot be initialized or if
    /// the DNS resolver fails to load the system's configuration. For a safer
    /// alternative that returns a `Result`, use [`ClientBuilder`].
    #[must_use]
    pub fn new() -> Self {
        ClientBuilder::new().build().expect("Client::new()")
    }

    /// Returns a [`ClientBuilder`] for creating a custom-configured `Client`.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

// Public facing impls
impl Client {
    /// Fetches the review videos for the product with the given `gtin`,
    /// keeping at most the first `max_videos` of them.
    ///
    /// This issues a single GET against the Expeerly API and classifies the
    /// result. It never returns an `Err`: every failure mode, from a missing
    /// `gtin` through a transport error, resolves into a terminal
    /// [`FetchOutcome::Error`] carrying a user-visible message. An empty
    /// `gtin` short-circuits before any request is made.
    ///
    /// Validation runs in a fixed order (body parses as JSON, `status` is the
    /// success marker, `response.videos` is an array, truncated list is
    /// non-empty) and the first failing check determines the reported message.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use expeerly::{Client, FetchOutcome};
    /// # #[tokio::main]
    /// # async fn main() {
    /// let client = Client::new();
    ///
    /// match client.product_reviews("7640177312136", 10).await {
    ///     FetchOutcome::Ready(reviews) => println!("{} reviews", reviews.len()),
    ///     FetchOutcome::Error(err) => eprintln!("{err}"),
    ///     FetchOutcome::Loading => unreachable!("product_reviews always resolves"),
    /// }
    /// # }
    /// ```
    pub async fn product_reviews(&self, gtin: &str, max_videos: usize) -> FetchOutcome {
        if gtin.is_empty() {
            return FetchOutcome::Error(FetchError::MissingGtin);
        }

        let response = match self.get_product_videos(gtin).await {
            Ok(response) => response,
            Err(err) => return FetchOutcome::Error(FetchError::Network(err)),
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return FetchOutcome::Error(FetchError::Network(err.into())),
        };

        classify(&body, max_videos)
    }
}

// Internal only impls
impl Client {
    pub(crate) async fn get_product_videos(&self, gtin: &str) -> Result<Response, ClientError> {
        let gtin = urlencoding::encode(gtin);
        let url = format!("{API_URL}?gtin={gtin}");
        let response = self.http.get(&url).send().await?;
        Ok(response)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies a response body into a terminal [`FetchOutcome`].
///
/// Checks are ordered and the first failure wins; in particular, emptiness is
/// only checked after the status and shape checks have passed, so an empty
/// `videos` array on a successful payload reports "not found" rather than
/// "not available".
fn classify(body: &str, max_videos: usize) -> FetchOutcome {
    let Ok(data) = serde_json::from_str::<Value>(body) else {
        return FetchOutcome::Error(FetchError::NoReviews);
    };

    if data.get("status").and_then(Value::as_str) != Some(STATUS_SUCCESS) {
        return FetchOutcome::Error(FetchError::NoReviews);
    }

    let Some(videos) = data
        .get("response")
        .and_then(|response| response.get("videos"))
        .and_then(Value::as_array)
    else {
        return FetchOutcome::Error(FetchError::NoReviews);
    };

    let reviews: Vec<Review> = videos
        .iter()
        .take(max_videos)
        // Elements are loosely typed upstream; one that isn't even an object
        // still counts as a review, just with no usable fields.
        .map(|video| Review::deserialize(video).unwrap_or_default())
        .collect();

    if reviews.is_empty() {
        return FetchOutcome::Error(FetchError::NoneForProduct);
    }

    FetchOutcome::Ready(reviews)
}

/// Represents the lifecycle of a review fetch for one widget instance.
///
/// An instance starts out `Loading`, is assigned exactly once when the fetch
/// resolves, and then never changes again: both `Error` and `Ready` are
/// terminal. A new fetch requires a new widget instance.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetch has not resolved yet.
    Loading,
    /// The fetch resolved without a renderable review list; the payload
    /// carries the user-visible message.
    Error(FetchError),
    /// The fetch resolved with at least one review, in the order the API
    /// returned them.
    Ready(Vec<Review>),
}

impl FetchOutcome {
    /// Returns whether the fetch is still pending.
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the fetched reviews, if the fetch resolved successfully.
    #[inline]
    #[must_use]
    pub fn reviews(&self) -> Option<&[Review]> {
        match self {
            Self::Ready(reviews) => Some(reviews),
            Self::Loading | Self::Error(_) => None,
        }
    }

    /// Returns the error this fetch resolved to, if any.
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(err) => Some(err),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}
