pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod name_generator;
pub mod pipeline;
pub mod ranking;
pub mod rng;
pub mod store;
pub mod types;
