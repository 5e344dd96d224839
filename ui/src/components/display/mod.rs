pub mod field_error;
pub mod loading_indicator;

pub use field_error::*;
pub use loading_indicator::*;
