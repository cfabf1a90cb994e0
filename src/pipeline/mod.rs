pub mod analysis;

pub use analysis::{analyze, Analysis, AnalysisOptions, TrendReport};
