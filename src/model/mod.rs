pub mod athlete;
pub mod attribute;
pub mod observation;
pub mod weights;

pub use athlete::{Athlete, AttributeTable};
pub use attribute::Attribute;
pub use observation::RankObservation;
pub use weights::{StageProfile, WeightVector};

/// Rounds to two decimals, the precision used for learned weights and for
/// display.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
