pub mod confidence;
pub mod learn;
pub mod score;

pub use confidence::{Confidence, confidence};
pub use learn::learn_weights;
pub use score::{RankedScore, StageForecast, forecast_stage, rank_scores, score};
