//! Token composition: spacing, radii, shadows and opacity scales.

use crate::brand::model::NormalizedBrand;
use crate::catalog::{Archetype, Catalog, Style, SCALE_KEYS, SPACING_KEYS, SPACING_STEPS};
use crate::error::{BrandkitError, BrandkitResult};

use super::model::{TokenScale, Tokens};
use super::palette::PaletteColors;

/// Tone score at which the style shifts one step.
const STYLE_SHIFT: i32 = 2;

/// Style archetype for a brand: the sector's style, nudged by tone.
pub fn resolve_style(brand: &NormalizedBrand, catalog: &Catalog) -> Style {
    let base = catalog
        .profile(brand.archetype)
        .or_else(|| catalog.profile(Archetype::Generic))
        .map(|p| p.style)
        .unwrap_or(Style::Balanced);

    if brand.tone_score >= STYLE_SHIFT {
        base.softer()
    } else if brand.tone_score <= -STYLE_SHIFT {
        base.sharper()
    } else {
        base
    }
}

/// Build the token groups for a style. Shadows are tinted with the darkest neutral.
pub fn compose(style: Style, colors: &PaletteColors, catalog: &Catalog) -> BrandkitResult<Tokens> {
    let scale = catalog
        .scale(style)
        .ok_or_else(|| BrandkitError::internal(format!("no token scale for style '{}'", style)))?;
    let shadow_color = colors.neutral[0];

    let mut spacing = TokenScale::default();
    for (key, step) in SPACING_KEYS.iter().zip(SPACING_STEPS) {
        spacing.push(*key, format!("{}px", scale.spacing_unit * step));
    }

    let mut radii = TokenScale::default();
    let mut shadows = TokenScale::default();
    let mut opacity = TokenScale::default();
    for (i, key) in SCALE_KEYS.iter().enumerate() {
        radii.push(*key, format!("{}px", scale.radii[i]));

        let s = scale.shadows[i];
        shadows.push(
            *key,
            format!("0 {}px {}px {}px {}", s.y, s.blur, s.spread, shadow_color.to_rgba(s.alpha)),
        );

        opacity.push(*key, scale.opacity[i].to_string());
    }

    Ok(Tokens {
        spacing,
        radii,
        shadows,
        opacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{model::BrandInput, normalize};
    use crate::config::EngineConfig;
    use crate::design::palette;

    fn tokens_for(mission: &str, sector: &str) -> (Style, Tokens) {
        let catalog = Catalog::builtin();
        let input = BrandInput::new("Acme", mission, "quality", "everyone", sector);
        let brand = normalize(&input, catalog).unwrap();
        let colors = palette::synthesize(&brand, catalog, &EngineConfig::default()).unwrap();
        let style = resolve_style(&brand, catalog);
        (style, compose(style, &colors, catalog).unwrap())
    }

    fn px(value: &str) -> u32 {
        value.trim_end_matches("px").parse().unwrap()
    }

    #[test]
    fn test_sector_style() {
        assert_eq!(tokens_for("Move money", "fintech").0, Style::Sharp);
        assert_eq!(tokens_for("Teach kids", "education").0, Style::Soft);
        assert_eq!(tokens_for("Sell goods", "retail").0, Style::Balanced);
    }

    #[test]
    fn test_tone_shifts_style() {
        assert_eq!(tokens_for("Bold, playful and fun banking", "fintech").0, Style::Balanced);
        assert_eq!(tokens_for("Trusted, secure, reliable groceries", "grocery").0, Style::Sharp);
    }

    #[test]
    fn test_groups_are_monotonic() {
        for sector in ["fintech", "education", "retail"] {
            let (_, tokens) = tokens_for("Do things", sector);
            let spacing: Vec<u32> = tokens.spacing.iter().map(|t| px(&t.value)).collect();
            assert!(spacing.windows(2).all(|w| w[0] < w[1]));
            let radii: Vec<u32> = tokens.radii.iter().map(|t| px(&t.value)).collect();
            assert!(radii.windows(2).all(|w| w[0] < w[1]));
            let opacity: Vec<f64> = tokens.opacity.iter().map(|t| t.value.parse().unwrap()).collect();
            assert!(opacity.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_balanced_values() {
        let (_, tokens) = tokens_for("Sell goods", "retail");
        let keys: Vec<&str> = tokens.spacing.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["xs", "sm", "md", "lg", "xl"]);
        assert_eq!(tokens.spacing.get("md"), Some("16px"));
        assert_eq!(tokens.radii.get("lg"), Some("12px"));
        assert_eq!(tokens.opacity.get("md"), Some("0.6"));
        let shadow = tokens.shadows.get("md").unwrap();
        assert!(shadow.starts_with("0 4px 6px -1px rgba("));
        assert!(shadow.ends_with(", 0.12)"));
    }
}
