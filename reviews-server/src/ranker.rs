use reviews_types::{AnnotatedReview, Review};

use crate::sentiment::SentimentAnalyzer;

/// Score each review and order by compound score, highest first.
///
/// The sort is stable, so reviews with equal scores keep their store order.
pub fn rank_reviews(
    analyzer: &dyn SentimentAnalyzer,
    reviews: Vec<Review>,
) -> Vec<AnnotatedReview> {
    let mut annotated: Vec<AnnotatedReview> = reviews
        .into_iter()
        .map(|review| {
            let sentiment = analyzer.polarity_scores(&review.review_body);
            AnnotatedReview { review, sentiment }
        })
        .collect();

    annotated.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));
    annotated
}
