pub mod aggregator;
pub mod counts;
pub mod error;
pub mod normalized;
