//! Generation pipeline for Personae.
//!
//! Apportions a requested total across age cohorts and sexes, samples names
//! and localities from frequency tables, and derives collision-free birth
//! dates, phones and emails. The resulting [`personae_core::Dataset`] can be
//! handed to the writers in [`output`].

pub mod assets;
pub mod birthdate;
pub mod contacts;
pub mod demography;
pub mod engine;
pub mod errors;
pub mod locations;
pub mod model;
pub mod output;
pub mod persons;
pub mod sampler;

pub use assets::{Assets, AssetsLoader, assets};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{BatchReport, GenerateOptions, GenerationReport};
