use reviews_types::{Review, ReviewQuery};

use crate::form::FormFields;
use crate::store::ReviewStore;

/// Build a query from a raw query string.
///
/// Never fails. Escapes that aren't valid UTF-8 decode to U+FFFD, so a
/// mangled location simply matches nothing.
pub fn parse_query(raw: Option<&str>) -> ReviewQuery {
    let mut fields = FormFields::parse(raw.unwrap_or_default());
    ReviewQuery {
        location: fields.take("location"),
        start_date: fields.take("start_date"),
        end_date: fields.take("end_date"),
    }
}

/// Whether `review` satisfies every constraint present in `query`.
///
/// Timestamps are compared as strings, so date bounds only behave as date
/// ranges when they share the stored `YYYY-MM-DD HH:MM:SS` layout. A bound
/// of `2023-01-31` excludes `2023-01-31 08:00:00`, since the shorter string
/// sorts first.
pub fn matches(query: &ReviewQuery, review: &Review) -> bool {
    if let Some(location) = &query.location {
        if review.location != *location {
            return false;
        }
    }
    if let Some(start) = &query.start_date {
        if review.timestamp.as_str() < start.as_str() {
            return false;
        }
    }
    if let Some(end) = &query.end_date {
        if review.timestamp.as_str() > end.as_str() {
            return false;
        }
    }
    true
}

/// Reviews matching `query`, in store order.
pub fn filter_reviews(store: &ReviewStore, query: &ReviewQuery) -> Vec<Review> {
    store.select(|review| matches(query, review))
}
