//! Represents an embeddable review widget backed by a single fetch.

mod render;

use crate::client::{Client, FetchOutcome};
use crate::review::average_rating;
use std::convert::Infallible;
use std::str::FromStr;

/// Represents the visual layout a [`Widget`] renders in.
///
/// Parsing is total: any string that isn't a recognized layout name parses to
/// [`Layout::Unknown`], which renders to empty output rather than falling
/// through to another layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// A compact pill with the logo, average rating, and review count.
    Badge,
    /// A header plus a horizontally scrolling list of reviews.
    #[default]
    ReviewBlock,
    /// A strip of playable video slides.
    Carousel,
    /// An unrecognized layout name; renders nothing.
    Unknown,
}

impl FromStr for Layout {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "badge" => Ok(Self::Badge),
            "reviewblock" => Ok(Self::ReviewBlock),
            "carousel" => Ok(Self::Carousel),
            _ => Ok(Self::Unknown),
        }
    }
}

/// Represents the color theme of a [`Widget`].
///
/// Affects presentation only: background and foreground colors and which logo
/// variant is shown. Unrecognized theme names parse to the default, [`Theme::Dark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Dark purple background with white text.
    #[default]
    Dark,
    /// White background with black text.
    Light,
    /// Like [`Theme::Light`], but with a smaller, reduced logo.
    Minimal,
}

impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "minimal" => Ok(Self::Minimal),
            // `dark` is also the configured default.
            _ => Ok(Self::Dark),
        }
    }
}

impl Theme {
    pub(crate) fn background(self) -> &'static str {
        match self {
            Self::Dark => "#2C1277",
            Self::Light | Self::Minimal => "#FFFFFF",
        }
    }

    pub(crate) fn foreground(self) -> &'static str {
        match self {
            Self::Dark => "#FFFFFF",
            Self::Light | Self::Minimal => "#000000",
        }
    }

    pub(crate) fn logo_url(self) -> &'static str {
        match self {
            Self::Dark => "https://www.expeerly.com/expeerly_reviewed_icon_DARK.svg",
            Self::Light => "https://www.expeerly.com/expeerly_reviewed_icon_LIGHT.svg",
            Self::Minimal => "https://www.expeerly.com/expeerly_reviewed_MINIMAL.svg",
        }
    }
}

/// A builder for configuring a [`Widget`] before its first (and only) fetch.
///
/// Created through [`Widget::builder()`]. Every option other than the GTIN has
/// a default: [`Layout::ReviewBlock`], a cap of 999 videos, [`Theme::Dark`],
/// an empty store id, and the `#4B49EB` accent color.
#[derive(Debug)]
pub struct WidgetBuilder {
    client: Client,
    gtin: String,
    layout: Layout,
    max_videos: usize,
    theme: Theme,
    store_id: String,
    accent_color: String,
}

impl WidgetBuilder {
    /// Sets the layout the widget renders in.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Caps how many reviews are kept from the fetched list.
    #[must_use]
    pub fn max_videos(mut self, max_videos: usize) -> Self {
        self.max_videos = max_videos;
        self
    }

    /// Sets the color theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the store id forwarded to carousel video players.
    #[must_use]
    pub fn store_id(mut self, store_id: &str) -> Self {
        self.store_id = store_id.to_owned();
        self
    }

    /// Sets the accent color used by the review block footer.
    #[must_use]
    pub fn accent_color(mut self, accent_color: &str) -> Self {
        self.accent_color = accent_color.to_owned();
        self
    }

    /// Consumes the builder and returns a [`Widget`] in the loading state.
    #[must_use]
    pub fn build(self) -> Widget {
        Widget {
            client: self.client,
            gtin: self.gtin,
            layout: self.layout,
            max_videos: self.max_videos,
            theme: self.theme,
            store_id: self.store_id,
            accent_color: self.accent_color,
            outcome: FetchOutcome::Loading,
        }
    }
}

/// Represents one embeddable review widget instance.
///
/// A widget owns its configuration and its [`FetchOutcome`] exclusively. It
/// fetches once, via [`load()`](Widget::load), and the resolved outcome is
/// terminal: to fetch again, create a new widget.
///
/// # Example
///
/// ```no_run
/// # use expeerly::{Client, Layout, Widget};
/// # #[tokio::main]
/// # async fn main() {
/// let client = Client::new();
///
/// let mut widget = Widget::builder(&client, "7640177312136")
///     .layout(Layout::Carousel)
///     .store_id("store-123")
///     .build();
///
/// widget.load().await;
/// println!("{}", widget.render());
/// # }
/// ```
#[derive(Debug)]
pub struct Widget {
    client: Client,
    gtin: String,
    layout: Layout,
    max_videos: usize,
    theme: Theme,
    store_id: String,
    accent_color: String,
    outcome: FetchOutcome,
}

impl Widget {
    /// Returns a [`WidgetBuilder`] for the product with the given `gtin`.
    ///
    /// An empty `gtin` is accepted here and reported at
    /// [`load()`](Widget::load) time as the missing-identifier outcome.
    #[must_use]
    pub fn builder(client: &Client, gtin: &str) -> WidgetBuilder {
        WidgetBuilder {
            client: client.clone(),
            gtin: gtin.to_owned(),
            layout: Layout::default(),
            max_videos: 999,
            theme: Theme::default(),
            store_id: String::new(),
            accent_color: "#4B49EB".to_owned(),
        }
    }

    /// Fetches the widget's reviews, resolving its [`FetchOutcome`].
    ///
    /// The outcome slot is assigned exactly once: the first call performs the
    /// fetch, and any call after the outcome has resolved is a no-op. There is
    /// no way to re-fetch through an existing widget.
    pub async fn load(&mut self) {
        if !self.outcome.is_loading() {
            return;
        }

        self.outcome = self
            .client
            .product_reviews(&self.gtin, self.max_videos)
            .await;
    }

    /// Returns the GTIN this widget was configured with.
    #[inline]
    #[must_use]
    pub fn gtin(&self) -> &str {
        &self.gtin
    }

    /// Returns the layout this widget renders in.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the widget's color theme.
    #[inline]
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the current state of the widget's fetch.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    /// Renders the widget into an HTML fragment.
    ///
    /// Before [`load()`](Widget::load) resolves this is a loading placeholder;
    /// after a failed fetch it is the error message. A resolved widget renders
    /// its review list in the configured [`Layout`], where [`Layout::Unknown`]
    /// produces empty output.
    #[must_use]
    pub fn render(&self) -> String {
        let reviews = match &self.outcome {
            FetchOutcome::Loading => return render::loading(),
            FetchOutcome::Error(err) => return render::message(&err.to_string()),
            FetchOutcome::Ready(reviews) => reviews,
        };

        let rating = average_rating(reviews);

        match self.layout {
            Layout::Badge => render::badge(self.theme, rating, reviews.len()),
            Layout::ReviewBlock => {
                render::review_block(self.theme, &self.accent_color, rating, reviews)
            }
            Layout::Carousel => render::carousel(reviews, &self.store_id),
            Layout::Unknown => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;
    use crate::review::Review;
    use pretty_assertions::assert_eq;

    fn resolved(widget: &mut Widget, outcome: FetchOutcome) {
        widget.outcome = outcome;
    }

    #[test]
    fn should_parse_layout_names() {
        assert_eq!(Layout::Badge, "badge".parse().unwrap());
        assert_eq!(Layout::ReviewBlock, "reviewblock".parse().unwrap());
        assert_eq!(Layout::Carousel, "carousel".parse().unwrap());
        assert_eq!(Layout::Unknown, "marquee".parse().unwrap());
        assert_eq!(Layout::ReviewBlock, Layout::default());
    }

    #[test]
    fn should_parse_theme_names() {
        assert_eq!(Theme::Dark, "dark".parse().unwrap());
        assert_eq!(Theme::Light, "light".parse().unwrap());
        assert_eq!(Theme::Minimal, "minimal".parse().unwrap());
        assert_eq!(Theme::Dark, "neon".parse().unwrap());
    }

    #[test]
    fn should_render_loading_placeholder_before_resolution() {
        let widget = Widget::builder(&Client::new(), "7640177312136").build();

        assert!(widget.outcome().is_loading());
        assert!(widget.render().contains("Loading"));
    }

    #[test]
    fn should_render_error_message_after_failed_fetch() {
        let mut widget = Widget::builder(&Client::new(), "").build();
        resolved(&mut widget, FetchOutcome::Error(FetchError::MissingGtin));

        assert!(widget.render().contains("Missing product identifier"));
    }

    #[test]
    fn unknown_layout_should_render_nothing() {
        let mut widget = Widget::builder(&Client::new(), "7640177312136")
            .layout(Layout::Unknown)
            .build();
        resolved(
            &mut widget,
            FetchOutcome::Ready(vec![Review::with_rating(5.0)]),
        );

        assert_eq!("", widget.render());
    }

    #[test]
    fn badge_should_show_rating_and_count() {
        let mut widget = Widget::builder(&Client::new(), "7640177312136")
            .layout(Layout::Badge)
            .build();
        resolved(
            &mut widget,
            FetchOutcome::Ready(vec![Review::with_rating(4.0), Review::with_rating(5.0)]),
        );

        let html = widget.render();
        assert!(html.contains("expeerly--badge"));
        assert!(html.contains("4.5"));
        assert!(html.contains("(2)"));
    }

    #[tokio::test]
    async fn load_should_be_single_assignment() {
        let mut widget = Widget::builder(&Client::new(), "").build();

        widget.load().await;
        assert!(matches!(
            widget.outcome(),
            FetchOutcome::Error(FetchError::MissingGtin)
        ));

        // A second load must not restart the lifecycle.
        widget.load().await;
        assert!(matches!(
            widget.outcome(),
            FetchOutcome::Error(FetchError::MissingGtin)
        ));
    }
}
