//! Represents a single fetched review and rating aggregation over review lists.

use crate::stdx::math::MathExt as _;
use crate::stdx::serde::{lenient_f64, lenient_string};
use serde::Deserialize;

/// Represents one review record from the Expeerly API.
///
/// The upstream payload is loosely typed, so every field is optional: a field
/// that is absent, `null`, or carries the wrong JSON type simply reads as
/// `None`. This type is not constructed directly, but gotten through
/// [`Client::product_reviews()`](crate::Client::product_reviews).
///
/// # Example
///
/// ```no_run
/// # use expeerly::{Client, FetchOutcome};
/// # #[tokio::main]
/// # async fn main() {
/// let client = Client::new();
///
/// if let FetchOutcome::Ready(reviews) = client.product_reviews("7640177312136", 10).await {
///     for review in &reviews {
///         println!("{:?}: {:?} stars", review.title(), review.rating());
///     }
/// }
/// # }
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient_f64")]
    rating_number: Option<f64>,

    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    mux_playback_id_text: Option<String>,
}

impl Review {
    /// Returns the star rating left with this review, if one was given.
    ///
    /// A present value is not guaranteed to be positive; only ratings greater
    /// than zero count toward [`average_rating()`].
    #[inline]
    pub fn rating(&self) -> Option<f64> {
        self.rating_number
    }

    /// Returns the display title of this review.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the Mux playback id for this review's video, if it has one.
    #[inline]
    pub fn playback_id(&self) -> Option<&str> {
        self.mux_playback_id_text.as_deref()
    }
}

#[cfg(test)]
impl Review {
    pub(crate) fn with_rating(rating: f64) -> Self {
        Self {
            rating_number: Some(rating),
            ..Self::default()
        }
    }
}

/// Computes the mean rating of a review list, rounded to one decimal place.
///
/// Only ratings that are present and strictly greater than zero are counted;
/// missing, zero, and negative values are skipped rather than zero-weighted.
/// When no review carries a usable rating the result is `0.0`.
///
/// This is a pure function and is cheap enough to recompute on demand.
///
/// # Example
///
/// ```no_run
/// # use expeerly::{Client, FetchOutcome, average_rating};
/// # #[tokio::main]
/// # async fn main() {
/// let client = Client::new();
///
/// if let FetchOutcome::Ready(reviews) = client.product_reviews("7640177312136", 10).await {
///     println!("{} stars on average", average_rating(&reviews));
/// }
/// # }
/// ```
#[must_use]
pub fn average_rating(reviews: &[Review]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;

    for review in reviews {
        if let Some(rating) = review.rating()
            && rating > 0.0
        {
            sum += rating;
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }

    (sum / f64::from(count)).round_to_tenths()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_average_zero_for_empty_list() {
        assert_eq!(0.0, average_rating(&[]));
    }

    #[test]
    fn should_average_valid_ratings() {
        let reviews = [Review::with_rating(4.0), Review::with_rating(5.0)];
        assert_eq!(4.5, average_rating(&reviews));
    }

    #[test]
    fn should_skip_missing_zero_and_negative_ratings() {
        let reviews = [
            Review::with_rating(-1.0),
            Review::with_rating(0.0),
            Review::default(),
            Review::with_rating(3.0),
        ];
        // Invalid entries are excluded entirely, not averaged in as zero.
        assert_eq!(3.0, average_rating(&reviews));
    }

    #[test]
    fn should_round_half_up_on_the_scaled_value() {
        let reviews = [Review::with_rating(4.24), Review::with_rating(4.26)];
        assert_eq!(4.3, average_rating(&reviews));
    }

    #[test]
    fn should_be_idempotent() {
        let reviews = [Review::with_rating(2.0), Review::with_rating(5.0)];
        assert_eq!(average_rating(&reviews), average_rating(&reviews));
    }

    #[test]
    fn should_read_lenient_fields_from_payload() {
        let review: Review = serde_json::from_str(
            r#"{"rating_number": "not a number", "title": "Great blender", "mux_playback_id_text": null}"#,
        )
        .unwrap();

        assert_eq!(None, review.rating());
        assert_eq!(Some("Great blender"), review.title());
        assert_eq!(None, review.playback_id());
    }
}
