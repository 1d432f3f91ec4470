use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use reviews_types::Review;

/// One row of the historical review export. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(rename = "ReviewId", default)]
    review_id: Option<String>,
    #[serde(rename = "Location", default)]
    location: Option<String>,
    #[serde(rename = "Timestamp", default)]
    timestamp: Option<String>,
    #[serde(rename = "ReviewBody", default)]
    review_body: Option<String>,
}

impl SeedRow {
    fn into_review(self) -> Option<Review> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        Some(Review {
            review_id: non_empty(self.review_id),
            location: non_empty(self.location)?,
            timestamp: non_empty(self.timestamp)?,
            review_body: non_empty(self.review_body)?,
        })
    }
}

/// Load seed reviews from a CSV file.
///
/// A missing file yields an empty store; anything else that goes wrong
/// reading it is an error.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Vec<Review>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Seed file {} not found, starting with an empty store",
            path.display()
        );
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open seed file {}", path.display()))?;
    let reviews = read_reviews(file)
        .with_context(|| format!("Failed to load seed file {}", path.display()))?;

    tracing::info!("Loaded {} seed reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// Parse CSV rows into reviews, skipping rows without a location,
/// timestamp or body.
pub fn read_reviews<R: Read>(reader: R) -> Result<Vec<Review>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers().context("Missing CSV header row")?.clone();
    for required in ["Location", "Timestamp", "ReviewBody"] {
        if !headers.iter().any(|h| h == required) {
            anyhow::bail!("Seed data is missing the {} column", required);
        }
    }

    let mut reviews = Vec::new();
    for (index, row) in csv_reader.deserialize::<SeedRow>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let row = row.with_context(|| format!("Malformed seed row {}", index + 2))?;
        match row.into_review() {
            Some(review) => reviews.push(review),
            None => tracing::warn!("Skipping incomplete seed row {}", index + 2),
        }
    }

    Ok(reviews)
}
