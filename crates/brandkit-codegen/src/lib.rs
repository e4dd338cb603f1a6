//! # Brandkit Codegen
//!
//! Writes generated design kits to disk: the CSS, flat JSON and Figma Tokens
//! exports plus a `design-system.md` reference.

pub mod design_system;

pub use design_system::{render_design_system_md, render_kit, write_kit, GeneratedFile};
