use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
};
use reviews_types::AnnotatedReview;

use crate::{
    api::{ApiError, ApiResult, PrettyJson},
    filter::{filter_reviews, parse_query},
    intake::submit_review,
    ranker::rank_reviews,
    state::AppState,
};

/// GET / - Reviews filtered by location and date range, best sentiment first
pub async fn list_reviews(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> PrettyJson<Vec<AnnotatedReview>> {
    let query = parse_query(raw_query.as_deref());
    let matching = filter_reviews(&state.store, &query);
    tracing::debug!("{} reviews match {:?}", matching.len(), query);

    PrettyJson(rank_reviews(state.analyzer.as_ref(), matching))
}

/// POST / - Submit a new review as a form-encoded body
pub async fn create_review(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<impl IntoResponse> {
    let body = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let review = submit_review(&state.store, &body).map_err(|e| {
        tracing::debug!("Rejected review submission: {}", e);
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, PrettyJson(review)))
}
