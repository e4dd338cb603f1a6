//! Palette synthesis.
//!
//! Primary hue is sampled from the archetype's hue range using the brand
//! seed; lightness is then walked until white text on primary meets the
//! configured contrast. Secondary is a fixed rotation of primary, lightened
//! until the pair separates. Neutrals are a desaturated ramp on primary's hue.

use crate::brand::model::NormalizedBrand;
use crate::catalog::{Archetype, ArchetypeProfile, Catalog};
use crate::color::{contrast_ratio, Hsl, Rgb, WHITE};
use crate::config::EngineConfig;
use crate::error::{BrandkitError, BrandkitResult};

use super::model::Palette;

pub const NEUTRAL_STEPS: usize = 5;

/// Resolved palette colors, before hex formatting.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub neutral: [Rgb; NEUTRAL_STEPS],
}

impl PaletteColors {
    pub fn to_palette(&self) -> Palette {
        Palette {
            primary: self.primary.to_rgb().to_hex(),
            secondary: self.secondary.to_rgb().to_hex(),
            neutral: self.neutral.iter().map(|c| c.to_hex()).collect(),
        }
    }
}

/// Derive the palette for a normalized brand.
pub fn synthesize(
    brand: &NormalizedBrand,
    catalog: &Catalog,
    config: &EngineConfig,
) -> BrandkitResult<PaletteColors> {
    let profile = profile_for(brand.archetype, catalog)?;
    let tone = config.palette.tone(profile.tone);
    let hue = sample_hue(profile, brand.seed);
    let step = config.palette.lightness_step;

    let seed_color = Hsl::new(hue, tone.saturation, tone.lightness);
    let primary = darken_until(seed_color, step, |c| {
        contrast_ratio(c.to_rgb(), WHITE) >= config.palette.min_text_contrast
    });
    let primary_rgb = primary.to_rgb();
    if contrast_ratio(primary_rgb, WHITE) < config.palette.min_text_contrast {
        return Err(BrandkitError::internal(format!(
            "primary {} cannot reach {}:1 against white",
            primary_rgb, config.palette.min_text_contrast
        )));
    }

    let rotated = seed_color.rotate(config.palette.secondary_rotation);
    let secondary = lighten_until(rotated, step, |c| {
        contrast_ratio(c.to_rgb(), primary_rgb) >= config.palette.pair_contrast
    });
    if contrast_ratio(secondary.to_rgb(), primary_rgb) < config.palette.pair_contrast {
        return Err(BrandkitError::internal(format!(
            "secondary {} cannot separate from primary {}",
            secondary.to_rgb(),
            primary_rgb
        )));
    }

    let neutral = neutral_ramp(primary.h, config);

    Ok(PaletteColors {
        primary,
        secondary,
        neutral,
    })
}

fn profile_for(archetype: Archetype, catalog: &Catalog) -> BrandkitResult<&ArchetypeProfile> {
    catalog
        .profile(archetype)
        .or_else(|| catalog.profile(Archetype::Generic))
        .ok_or_else(|| BrandkitError::internal(format!("no palette profile for '{}'", archetype)))
}

/// Hue within the profile's range, picked by seed. The generic profile
/// always uses its default hue.
pub fn sample_hue(profile: &ArchetypeProfile, seed: u64) -> f64 {
    let (lo, hi) = profile.hue_range;
    if profile.archetype == Archetype::Generic || hi <= lo {
        return profile.default_hue;
    }
    let fraction = (seed % 1000) as f64 / 1000.0;
    ((lo + fraction * (hi - lo)) * 10.0).round() / 10.0
}

fn darken_until(color: Hsl, step: f64, done: impl Fn(Hsl) -> bool) -> Hsl {
    let steps = (color.l / step).ceil() as u32;
    (0..=steps)
        .map(|i| color.with_lightness(color.l - step * f64::from(i)))
        .find(|c| done(*c))
        .unwrap_or_else(|| color.with_lightness(0.0))
}

fn lighten_until(color: Hsl, step: f64, done: impl Fn(Hsl) -> bool) -> Hsl {
    let steps = ((1.0 - color.l) / step).ceil() as u32;
    (0..=steps)
        .map(|i| color.with_lightness(color.l + step * f64::from(i)))
        .find(|c| done(*c))
        .unwrap_or_else(|| color.with_lightness(1.0))
}

fn neutral_ramp(hue: f64, config: &EngineConfig) -> [Rgb; NEUTRAL_STEPS] {
    let n = &config.neutral;
    let span = n.lightest - n.darkest;
    std::array::from_fn(|i| {
        let l = n.darkest + span * i as f64 / (NEUTRAL_STEPS - 1) as f64;
        Hsl::new(hue, n.saturation, l).to_rgb()
    })
}
