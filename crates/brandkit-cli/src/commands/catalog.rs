//! Catalog listing command.

use anyhow::Result;
use brandkit_core::Engine;

use crate::output;

pub fn execute(engine: &Engine) -> Result<()> {
    output::print_catalog(engine.catalog());
    Ok(())
}
