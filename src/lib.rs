pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod sampler;
pub mod selection;
pub mod stats;
