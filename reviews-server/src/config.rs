use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::sentiment::AnalyzerKind;

/// Environment variables and the settings key each one overrides.
const ENV_OVERRIDES: [(&str, &str); 4] = [
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("SEED_PATH", "store.seed_path"),
    ("SENTIMENT_ANALYZER", "sentiment.analyzer"),
];

#[derive(Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    /// CSV loaded into the store at startup. Missing means start empty.
    pub seed_path: String,
}

#[derive(Debug, Deserialize)]
pub struct Sentiment {
    pub analyzer: AnalyzerKind,
}

/// Defaults, then an optional `settings.{toml,..}` in the working
/// directory, then the variables in [`ENV_OVERRIDES`].
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub store: Store,
    pub sentiment: Sentiment,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("store.seed_path", "data/reviews.csv")?
            .set_default("sentiment.analyzer", "full")?
            .add_source(File::with_name("settings").required(false));

        for (var, key) in ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }
}
