//! Explanation writer.

use crate::brand::model::NormalizedBrand;
use crate::catalog::{Catalog, Style};
use crate::color::hue_name;

use super::model::{Palette, Typography};
use super::palette::PaletteColors;

/// One short paragraph tying the generated kit back to the brand.
///
/// Only the palette's own primary and secondary are ever named.
pub fn write(
    brand: &NormalizedBrand,
    colors: &PaletteColors,
    palette: &Palette,
    typography: &Typography,
    style: Style,
    catalog: &Catalog,
) -> String {
    let tone = catalog
        .profile(brand.archetype)
        .map(|p| p.tone.as_str())
        .unwrap_or("balanced");

    let grounding = match brand.value_terms.as_slice() {
        [] => String::new(),
        [only] => format!(", grounded in {}", only),
        [init @ .., last] => format!(", grounded in {} and {}", init.join(", "), last),
    };

    format!(
        "{name} pairs a {primary_hue} primary ({primary}) with a {secondary_hue} secondary ({secondary}), \
         a {tone} palette chosen for the {sector} sector{grounding}. \
         {family} sets a {style} typographic voice for {audience}, and white text on the primary stays readable.",
        name = brand.display.name,
        primary_hue = hue_name(colors.primary.h),
        primary = palette.primary,
        secondary_hue = hue_name(colors.secondary.h),
        secondary = palette.secondary,
        tone = tone,
        sector = brand.display.sector,
        grounding = grounding,
        family = typography.family,
        style = style,
        audience = brand.display.audience,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{model::BrandInput, normalize};
    use crate::config::EngineConfig;
    use crate::design::{palette, tokens, typography};

    #[test]
    fn test_mentions_only_generated_colors() {
        let catalog = Catalog::builtin();
        let input = BrandInput::new(
            "FinTrust",
            "Secure financial services",
            "trust, security, professionalism",
            "small businesses",
            "fintech",
        );
        let brand = normalize(&input, catalog).unwrap();
        let colors = palette::synthesize(&brand, catalog, &EngineConfig::default()).unwrap();
        let pal = colors.to_palette();
        let typo = typography::select(&brand, catalog).unwrap();
        let style = tokens::resolve_style(&brand, catalog);
        let text = write(&brand, &colors, &pal, &typo, style, catalog);

        assert!(text.starts_with("FinTrust pairs a "));
        assert!(text.contains(&pal.primary));
        assert!(text.contains(&pal.secondary));
        assert!(text.contains("fintech sector"));
        assert!(text.contains("grounded in trust, security and professionalism"));
        assert!(text.contains(&typo.family));
        assert_eq!(text.matches('#').count(), 2);
    }
}
