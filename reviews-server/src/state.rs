use std::sync::Arc;

use crate::sentiment::{SentimentAnalyzer, VaderAnalyzer};
use crate::store::ReviewStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ReviewStore,
    pub analyzer: Arc<dyn SentimentAnalyzer>,
}

impl AppState {
    /// State backed by the bundled lexicon analyzer.
    pub fn new(store: ReviewStore) -> Self {
        Self::with_analyzer(store, Arc::new(VaderAnalyzer::new()))
    }

    pub fn with_analyzer(store: ReviewStore, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { store, analyzer }
    }
}
