pub mod seed;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reviews_types::Review;

pub use seed::load_seed;

/// In-memory, insertion-ordered review collection shared across handlers.
///
/// Reviews are only ever appended. Cloning the store clones the handle, not
/// the data.
#[derive(Clone, Default)]
pub struct ReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Arc::new(RwLock::new(reviews)),
        }
    }

    pub fn append(&self, review: Review) {
        self.write().push(review);
    }

    /// Clone out every review matching `predicate`, in store order.
    ///
    /// The read lock is held only while copying.
    pub fn select<F>(&self, predicate: F) -> Vec<Review>
    where
        F: Fn(&Review) -> bool,
    {
        self.read()
            .iter()
            .filter(|review| predicate(review))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Appends are a single push, so a poisoned lock never guards a torn entry.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Review>> {
        self.reviews.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Review>> {
        self.reviews.write().unwrap_or_else(PoisonError::into_inner)
    }
}
