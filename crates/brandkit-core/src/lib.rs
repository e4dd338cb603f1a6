//! Brandkit Core Library
//!
//! The brand-to-design-system generation engine: turns a brand's name,
//! mission, values, audience and sector into a palette, a typography choice,
//! design tokens, an explanation and three token exports.

pub mod brand;
pub mod catalog;
pub mod color;
pub mod config;
pub mod design;
pub mod error;
pub mod export;
pub mod generator;

pub use brand::model::BrandInput;
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use design::model::{Exports, Palette, Tokens, Typography, UxKit};
pub use error::{BrandkitError, BrandkitResult};
pub use generator::{Engine, GenerationStage};
