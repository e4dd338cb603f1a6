//! Terminal output formatting.

use brandkit_core::catalog::Catalog;
use brandkit_core::color::Rgb;
use brandkit_core::export::NEUTRAL_NAMES;
use brandkit_core::{BrandInput, UxKit};
use colored::Colorize;

/// Print a generated kit with color swatches.
pub fn print_kit(input: &BrandInput, kit: &UxKit) {
    println!();
    println!("{} {}", input.name.trim().cyan().bold(), format!("({})", input.sector.trim()).dimmed());
    println!();
    println!("{}", kit.explanation);
    println!();

    println!("{}", "Palette".bold());
    print_swatch("primary", &kit.palette.primary);
    print_swatch("secondary", &kit.palette.secondary);
    for (name, hex) in NEUTRAL_NAMES.iter().zip(&kit.palette.neutral) {
        print_swatch(name, hex);
    }
    println!();

    println!("{}", "Typography".bold());
    println!("  {:<14} {}", "family", kit.typography.family);
    println!("  {:<14} {}", "import", kit.typography.import_url.dimmed());
    println!();

    for (group, scale) in kit.tokens.groups() {
        println!("{}", capitalize(group).bold());
        for token in scale.iter() {
            println!("  {:<14} {}", token.key, token.value);
        }
        println!();
    }
}

fn print_swatch(name: &str, hex: &str) {
    let swatch = match Rgb::from_hex(hex) {
        Ok(c) => "    ".on_truecolor(c.r, c.g, c.b).to_string(),
        Err(_) => "    ".to_string(),
    };
    println!("  {:<14} {} {}", name, swatch, hex);
}

/// Print archetypes and fonts.
pub fn print_catalog(catalog: &Catalog) {
    println!("{}", "Sector Archetypes".bold());
    println!("{:<12} {:<10} {:<10} {:<10} {}", "Archetype", "Hues", "Tone", "Style", "Keywords");
    println!("{}", "-".repeat(90));
    for profile in &catalog.archetypes {
        let keywords = if profile.keywords.is_empty() {
            "(fallback)".dimmed().to_string()
        } else {
            profile.keywords.join(", ")
        };
        println!(
            "{:<12} {:<10} {:<10} {:<10} {}",
            profile.archetype.as_str().cyan(),
            format!("{}-{}", profile.hue_range.0, profile.hue_range.1),
            profile.tone.as_str(),
            profile.style.as_str(),
            keywords
        );
    }
    println!();

    println!("{}", "Fonts".bold());
    println!("{:<20} {:<12} {}", "Family", "Category", "Import URL");
    println!("{}", "-".repeat(90));
    for font in &catalog.fonts {
        println!(
            "{:<20} {:<12} {}",
            font.family.cyan(),
            font.category,
            font.import_url().dimmed()
        );
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
