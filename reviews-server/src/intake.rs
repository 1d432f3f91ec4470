use chrono::Local;
use uuid::Uuid;

use reviews_types::{Location, Review};

use crate::error::{ReviewError, ReviewResult};
use crate::form::FormFields;
use crate::store::ReviewStore;

/// Layout of stored timestamps, and of the filter bounds compared against them.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const MISSING_FIELDS: &str = "Missing Location or ReviewBody";
pub const INVALID_LOCATION: &str = "Invalid Location";

/// A validated submission, not yet stamped or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub location: Location,
    pub review_body: String,
}

impl NewReview {
    /// Pull `Location` and `ReviewBody` out of a decoded form.
    ///
    /// Both must be present and non-empty; the location must name one of the
    /// supported cities exactly.
    pub fn from_form(mut fields: FormFields) -> ReviewResult<Self> {
        let location = fields.take("Location").filter(|v| !v.is_empty());
        let review_body = fields.take("ReviewBody").filter(|v| !v.is_empty());

        let (Some(location), Some(review_body)) = (location, review_body) else {
            return Err(ReviewError::Validation(MISSING_FIELDS.to_string()));
        };

        let location = Location::parse(&location)
            .ok_or_else(|| ReviewError::Validation(INVALID_LOCATION.to_string()))?;

        Ok(Self {
            location,
            review_body,
        })
    }

    /// Stamp with a fresh id and the current local time.
    pub fn into_review(self) -> Review {
        Review {
            review_id: Some(Uuid::new_v4().to_string()),
            location: self.location.as_str().to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            review_body: self.review_body,
        }
    }
}

/// Validate a form-encoded body and append the resulting review.
///
/// Nothing is stored unless every check passes.
pub fn submit_review(store: &ReviewStore, body: &[u8]) -> ReviewResult<Review> {
    let body = std::str::from_utf8(body)
        .map_err(|e| ReviewError::Parse(format!("Request body is not valid UTF-8: {}", e)))?;
    let fields = FormFields::parse(body);

    let review = NewReview::from_form(fields)?.into_review();
    store.append(review.clone());

    tracing::info!(
        "Stored review {} for {}",
        review.review_id.as_deref().unwrap_or_default(),
        review.location
    );
    Ok(review)
}
