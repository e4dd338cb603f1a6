//! Design kit synthesis stages.

pub mod explain;
pub mod model;
pub mod palette;
pub mod tokens;
pub mod typography;
