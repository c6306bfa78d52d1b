mod growth_model;
pub mod performance_model;
mod series_synthesizer;

pub use growth_model::{SyntheticGrowthModel, ValuationModelTrait};
pub use performance_model::*;
pub use series_synthesizer::synthesize_performance_series;
