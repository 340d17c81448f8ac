use expeerly::{Client, FetchOutcome, Layout, Widget, average_rating};

// These hit the live Expeerly API, so they are ignored by default.
// Run with `cargo test -- --ignored` when network access is available.

const GTIN: &str = "7640177312136";

#[tokio::test]
#[ignore = "requires network access to app.expeerly.com"]
async fn product_reviews() {
    let client = Client::new();

    match client.product_reviews(GTIN, 10).await {
        FetchOutcome::Ready(reviews) => {
            assert!(!reviews.is_empty());
            assert!(reviews.len() <= 10);

            for review in &reviews {
                println!("title: {:?}", review.title());
                println!("rating: {:?}", review.rating());
                println!("playback_id: {:?}", review.playback_id());
            }

            let rating = average_rating(&reviews);
            println!("average: {rating}");
            assert!((0.0..=5.0).contains(&rating));
        }
        FetchOutcome::Error(err) => println!("no reviews for test gtin: {err}"),
        FetchOutcome::Loading => unreachable!("product_reviews always resolves"),
    }
}

#[tokio::test]
#[ignore = "requires network access to app.expeerly.com"]
async fn widget_lifecycle() {
    let client = Client::new();

    let mut widget = Widget::builder(&client, GTIN)
        .layout(Layout::Badge)
        .max_videos(5)
        .build();

    assert!(widget.outcome().is_loading());

    widget.load().await;

    assert!(!widget.outcome().is_loading());
    println!("{}", widget.render());
}

#[tokio::test]
#[ignore = "requires network access to app.expeerly.com"]
async fn unknown_gtin_reports_not_found() {
    let client = Client::new();

    let outcome = client.product_reviews("0000000000000", 10).await;

    let err = outcome.error().expect("gtin should have no reviews");
    println!("{err}");
}
