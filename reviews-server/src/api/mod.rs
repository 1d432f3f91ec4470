pub mod error;
pub mod json;
pub mod reviews;

pub use error::{ApiError, ApiResult};
pub use json::PrettyJson;
