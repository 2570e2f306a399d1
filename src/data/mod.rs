//! Synthetic life-data generation.

pub mod sample;

pub use sample::*;
