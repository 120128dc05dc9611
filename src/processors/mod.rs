pub mod aggregator;
pub mod engine;

pub use aggregator::AggregationState;
pub use engine::ProcessingEngine;
