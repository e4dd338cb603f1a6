//! Design kit artifact generation.
//!
//! Renders a `UxKit` into the files a designer downloads: `tokens.css`,
//! `tokens.json`, `figma-tokens.json` and a markdown reference.

use anyhow::{Context, Result};
use std::path::Path;

use brandkit_core::export::NEUTRAL_NAMES;
use brandkit_core::{BrandInput, UxKit};

/// A generated file, relative to the output directory.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
}

/// Render every artifact for a kit.
pub fn render_kit(kit: &UxKit, brand: &BrandInput) -> Result<Vec<GeneratedFile>> {
    Ok(vec![
        GeneratedFile {
            filename: "tokens.css".to_string(),
            content: kit.exports.css.clone(),
        },
        GeneratedFile {
            filename: "tokens.json".to_string(),
            content: serde_json::to_string_pretty(&kit.exports.json)?,
        },
        GeneratedFile {
            filename: "figma-tokens.json".to_string(),
            content: serde_json::to_string_pretty(&kit.exports.figma)?,
        },
        GeneratedFile {
            filename: "design-system.md".to_string(),
            content: render_design_system_md(kit, brand),
        },
    ])
}

/// Write every artifact into `out_dir`, creating it if needed. Returns the written paths.
pub fn write_kit(kit: &UxKit, brand: &BrandInput, out_dir: &Path) -> Result<Vec<String>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create: {}", out_dir.display()))?;

    let mut written = Vec::new();
    for file in render_kit(kit, brand)? {
        let path = out_dir.join(&file.filename);
        std::fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Wrote kit artifact");
        written.push(path.display().to_string());
    }
    Ok(written)
}

/// Render the kit into a markdown reference document.
pub fn render_design_system_md(kit: &UxKit, brand: &BrandInput) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} Design System\n\n", brand.name.trim()));
    md.push_str(&format!("> Sector: {}\n", brand.sector.trim()));
    md.push_str(&format!("> Audience: {}\n\n", brand.audience.trim()));
    md.push_str(&format!("{}\n\n", kit.explanation));

    md.push_str("## CSS Custom Properties\n\n");
    md.push_str("```css\n");
    md.push_str(&kit.exports.css);
    md.push_str("```\n\n");

    // Color Palette
    md.push_str("## Color Palette\n\n");
    md.push_str("| Token | Hex |\n");
    md.push_str("|-------|-----|\n");
    md.push_str(&format!("| `--color-primary` | `{}` |\n", kit.palette.primary));
    md.push_str(&format!("| `--color-secondary` | `{}` |\n", kit.palette.secondary));
    for (name, hex) in NEUTRAL_NAMES.iter().zip(&kit.palette.neutral) {
        md.push_str(&format!("| `--color-{}` | `{}` |\n", name, hex));
    }
    md.push('\n');

    // Typography
    md.push_str("## Typography\n\n");
    md.push_str(&format!("**Family:** {}\n\n", kit.typography.family));
    md.push_str("```css\n");
    md.push_str(&format!("@import url(\"{}\");\n", kit.typography.import_url));
    md.push_str("```\n\n");

    for (group, title) in [
        ("spacing", "Spacing Scale"),
        ("radii", "Border Radius"),
        ("shadows", "Shadows"),
        ("opacity", "Opacity"),
    ] {
        let Some((_, scale)) = kit.tokens.groups().into_iter().find(|(g, _)| *g == group) else {
            continue;
        };
        if scale.is_empty() {
            continue;
        }
        md.push_str(&format!("## {}\n\n", title));
        md.push_str("| Token | Value |\n");
        md.push_str("|-------|-------|\n");
        for token in scale.iter() {
            md.push_str(&format!("| `--{}-{}` | `{}` |\n", group, token.key, token.value));
        }
        md.push('\n');
    }

    md
}
