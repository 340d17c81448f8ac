//! HTML fragment assembly for the widget layouts.
//!
//! Markup only; all data decisions (fetching, truncation, aggregation) happen
//! before these run. Review titles and player attributes come from the remote
//! payload and are escaped on the way in.

use super::Theme;
use crate::review::Review;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

const FONT: &str = "font-family:Mulish,sans-serif";

pub(super) fn loading() -> String {
    format!("<div style=\"{FONT}\">Loading reviews...</div>")
}

pub(super) fn message(text: &str) -> String {
    format!("<div style=\"{FONT}\">{}</div>", encode_text(text))
}

/// A compact pill: logo, average rating, inline stars, and the review count.
pub(super) fn badge(theme: Theme, rating: f64, total: usize) -> String {
    let logo_height = match theme {
        Theme::Minimal => "24px",
        Theme::Dark | Theme::Light => "48px",
    };

    format!(
        "<div class=\"expeerly--badge\" style=\"{FONT};display:inline-flex;align-items:center;gap:6px;padding:4px 12px;background:{bg};color:{fg};border-radius:9999px\">\
         <img src=\"{logo}\" alt=\"Expeerly Reviewed\" style=\"height:{logo_height}\"/>\
         <span style=\"font-weight:600\">{rating}</span>{stars}\
         <span style=\"color:#FA0F9C;font-size:0.85rem\">({total})</span>\
         </div>",
        bg = theme.background(),
        fg = theme.foreground(),
        logo = theme.logo_url(),
        stars = stars_inline(rating),
    )
}

/// The full review block: themed header, scrolling review titles, and an
/// accent-colored footer.
pub(super) fn review_block(
    theme: Theme,
    accent_color: &str,
    rating: f64,
    reviews: &[Review],
) -> String {
    let logo_height = match theme {
        Theme::Minimal => "24px",
        Theme::Dark | Theme::Light => "60px",
    };
    let label = if reviews.len() == 1 { "Review" } else { "Reviews" };

    let mut items = String::new();
    for review in reviews {
        let title = review.title().unwrap_or("Untitled review");
        let _ = write!(
            items,
            "<div class=\"review-item\"><p>{}</p></div>",
            encode_text(title)
        );
    }

    format!(
        "<div class=\"expeerly--reviewblock\" style=\"{FONT};margin:20px auto;padding:10px\">\
         <div style=\"background:{bg};color:{fg};padding:8px;border-radius:8px;max-width:300px\">\
         <img src=\"{logo}\" alt=\"Expeerly Logo\" style=\"height:{logo_height}\"/>\
         <div style=\"display:flex;align-items:center;gap:8px;margin-top:6px\">\
         <span style=\"font-size:14px;font-weight:bold\">{rating}</span>{stars}\
         <span style=\"color:#ff0080\">({total} {label})</span>\
         </div></div>\
         <div style=\"display:flex;gap:16px;overflow-x:auto\">{items}</div>\
         <div style=\"margin-top:12px;font-size:14px;color:{accent}\"><p>Watch real customer reviews on Expeerly</p></div>\
         </div>",
        bg = theme.background(),
        fg = theme.foreground(),
        logo = theme.logo_url(),
        stars = stars_inline(rating),
        total = reviews.len(),
        accent = encode_double_quoted_attribute(accent_color),
    )
}

/// A strip of video slides; reviews without a playback id get a placeholder.
pub(super) fn carousel(reviews: &[Review], store_id: &str) -> String {
    let mut slides = String::new();

    for review in reviews {
        let slide = match review.playback_id() {
            Some(playback_id) => format!(
                "<mux-player playback-id=\"{}\" stream-type=\"on-demand\" controls muted data-store-id=\"{}\" style=\"width:100%;height:100%;object-fit:cover\"></mux-player>",
                encode_double_quoted_attribute(playback_id),
                encode_double_quoted_attribute(store_id),
            ),
            None => {
                "<div style=\"width:100%;height:100%;background:#ccc;display:flex;align-items:center;justify-content:center\">No video</div>".to_owned()
            }
        };

        let _ = write!(
            slides,
            "<div class=\"expeerly--slide\" style=\"position:relative;width:180px;height:320px;border-radius:8px;overflow:hidden;flex-shrink:0\">{slide}</div>"
        );
    }

    format!(
        "<div class=\"expeerly--carousel\" style=\"{FONT};margin:20px auto;padding:10px;border-radius:6px\">\
         <div style=\"display:flex;gap:16px;overflow-x:auto\">{slides}</div>\
         </div>"
    )
}

/// Renders a five-star strip with `round(rating)` of them filled.
fn stars_inline(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.round().clamp(0.0, 5.0) as usize;

    let mut stars = String::from("<span>");
    for i in 0..5 {
        stars.push(if i < filled { '★' } else { '☆' });
    }
    stars.push_str("</span>");
    stars
}
