pub mod enums;
pub mod models;

pub use enums::*;
pub use models::*;
