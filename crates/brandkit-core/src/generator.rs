//! Generation orchestrator.
//!
//! Runs one request through
//! `Received -> Validated -> Normalized -> Synthesized -> Composed -> Serialized -> Completed`.
//! Only validation may reject a request; every later stage is total.

use std::fmt;

use tracing::{debug, error, info, warn};

use crate::brand::{self, model::BrandInput};
use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::design::{explain, palette, tokens, typography};
use crate::design::model::UxKit;
use crate::error::{BrandkitError, BrandkitResult};
use crate::export;

/// Lifecycle of a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Received,
    Validated,
    Normalized,
    Synthesized,
    Composed,
    Serialized,
    Completed,
    Rejected,
}

impl GenerationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::Normalized => "normalized",
            Self::Synthesized => "synthesized",
            Self::Composed => "composed",
            Self::Serialized => "serialized",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    /// Check if transition to target stage is valid.
    pub fn can_transition_to(&self, target: GenerationStage) -> bool {
        use GenerationStage::*;
        matches!(
            (self, target),
            (Received, Validated)
                | (Received, Rejected)
                | (Validated, Normalized)
                | (Normalized, Synthesized)
                | (Synthesized, Composed)
                | (Composed, Serialized)
                | (Serialized, Completed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the stage of one run and logs each transition.
struct Run {
    stage: GenerationStage,
}

impl Run {
    fn new() -> Self {
        debug!(stage = %GenerationStage::Received, "Generation run started");
        Self {
            stage: GenerationStage::Received,
        }
    }

    fn advance(&mut self, next: GenerationStage) -> BrandkitResult<()> {
        if !self.stage.can_transition_to(next) {
            return Err(BrandkitError::internal(format!(
                "invalid stage transition: cannot move from '{}' to '{}'",
                self.stage, next
            )));
        }
        debug!(from = %self.stage, stage = %next, "Generation stage");
        self.stage = next;
        Ok(())
    }
}

/// The generation engine. Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    catalog: &'static Catalog,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            catalog: Catalog::builtin(),
        }
    }
}

impl Engine {
    /// Build an engine over the built-in catalog, validating `config`.
    pub fn new(config: EngineConfig) -> BrandkitResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: Catalog::builtin(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Generate a complete kit, or reject the input. Never returns a partial kit.
    pub fn generate(&self, input: &BrandInput) -> BrandkitResult<UxKit> {
        let result = self.run(input);
        match &result {
            Ok(kit) => info!(
                primary = %kit.palette.primary,
                family = %kit.typography.family,
                "Generated design kit"
            ),
            Err(e) if e.is_validation() => warn!(error = %e, "Rejected brand input"),
            Err(e) => error!(error = %e, "Design kit generation failed"),
        }
        result
    }

    fn run(&self, input: &BrandInput) -> BrandkitResult<UxKit> {
        let mut run = Run::new();

        if let Err(e) = brand::validate(input) {
            run.advance(GenerationStage::Rejected)?;
            return Err(e);
        }
        run.advance(GenerationStage::Validated)?;

        let brand = brand::normalize(input, self.catalog)?;
        debug!(
            archetype = %brand.archetype,
            audience = brand.audience.as_str(),
            tone_score = brand.tone_score,
            "Normalized brand"
        );
        run.advance(GenerationStage::Normalized)?;

        let colors = palette::synthesize(&brand, self.catalog, &self.config)?;
        let palette = colors.to_palette();
        let typography = typography::select(&brand, self.catalog)?;
        run.advance(GenerationStage::Synthesized)?;

        let style = tokens::resolve_style(&brand, self.catalog);
        let tokens = tokens::compose(style, &colors, self.catalog)?;
        let explanation = explain::write(&brand, &colors, &palette, &typography, style, self.catalog);
        run.advance(GenerationStage::Composed)?;

        let exports = export::serialize(&palette, &typography, &tokens);
        run.advance(GenerationStage::Serialized)?;

        run.advance(GenerationStage::Completed)?;
        Ok(UxKit {
            explanation,
            palette,
            typography,
            tokens,
            exports,
        })
    }
}
