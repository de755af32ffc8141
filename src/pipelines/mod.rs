//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables
//! easy and flexible pipeline creation, and the corpus sampling pipeline
//! itself.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod sample;

pub use pipeline::Pipeline;
pub use sample::SampleCorpus;
