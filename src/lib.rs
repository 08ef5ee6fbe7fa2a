//! Stage-by-stage rider scoring with weights that adapt to recorded results.
//!
//! A roster of athletes ([`model::AttributeTable`]) is scored against a
//! per-stage [`model::WeightVector`]; recorded finishing ranks are turned into
//! new weights by [`pipeline::learn_weights`] and persisted through
//! [`history::WeightHistoryStore`].

pub mod error;
pub mod forecaster;
pub mod history;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod tracing;

pub use error::{Error, Result};
pub use forecaster::Forecaster;
pub use history::{StoreState, WeightHistory, WeightHistoryStore};
