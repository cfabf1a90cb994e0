pub mod types;
pub mod classification;

pub use types::LoadTrendError;
pub use classification::ErrorClassification;
