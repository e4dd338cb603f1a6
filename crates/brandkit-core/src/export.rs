//! Export serialization.
//!
//! All three exports are rendered from one [`TokenTable`] built from the
//! palette, typography and tokens, so they can never disagree with each
//! other or with the top-level kit fields.

use serde_json::{json, Map, Value};

use crate::design::model::{Exports, Palette, Tokens, Typography};

/// Neutral ramp names, darkest to lightest.
pub const NEUTRAL_NAMES: [&str; 5] = ["neutral-900", "neutral-700", "neutral-500", "neutral-300", "neutral-100"];

/// Kind of a canonical token row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGroup {
    Color,
    FontFamily,
    Spacing,
    Radii,
    Shadows,
    Opacity,
}

impl TokenGroup {
    /// Top-level group name in the Figma Tokens tree.
    pub fn figma_group(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::FontFamily => "fontFamily",
            Self::Spacing => "spacing",
            Self::Radii => "radii",
            Self::Shadows => "shadow",
            Self::Opacity => "opacity",
        }
    }

    /// Figma Tokens `type` for leaves of this group.
    pub fn figma_type(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::FontFamily => "fontFamilies",
            Self::Spacing => "spacing",
            Self::Radii => "borderRadius",
            Self::Shadows => "boxShadow",
            Self::Opacity => "opacity",
        }
    }
}

/// One canonical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub group: TokenGroup,
    /// Flat name, e.g. `primary`, `neutral-500`, `spacing-md`.
    pub name: String,
    /// Name inside its Figma group, e.g. `primary`, `base`, `md`.
    pub leaf: String,
    pub value: String,
}

impl TokenRow {
    /// CSS custom property name.
    pub fn css_var(&self) -> String {
        match self.group {
            TokenGroup::Color => format!("--color-{}", self.name),
            _ => format!("--{}", self.name),
        }
    }
}

/// Ordered canonical token table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    pub rows: Vec<TokenRow>,
    pub import_url: String,
}

impl TokenTable {
    pub fn build(palette: &Palette, typography: &Typography, tokens: &Tokens) -> Self {
        let mut rows = Vec::new();
        let color = |name: &str, value: &str| TokenRow {
            group: TokenGroup::Color,
            name: name.to_string(),
            leaf: name.to_string(),
            value: value.to_string(),
        };

        rows.push(color("primary", &palette.primary));
        rows.push(color("secondary", &palette.secondary));
        for (name, value) in NEUTRAL_NAMES.iter().zip(&palette.neutral) {
            rows.push(color(name, value));
        }

        rows.push(TokenRow {
            group: TokenGroup::FontFamily,
            name: "font-family".to_string(),
            leaf: "base".to_string(),
            value: typography.family.clone(),
        });

        let scales = [
            (TokenGroup::Spacing, "spacing", &tokens.spacing),
            (TokenGroup::Radii, "radii", &tokens.radii),
            (TokenGroup::Shadows, "shadows", &tokens.shadows),
            (TokenGroup::Opacity, "opacity", &tokens.opacity),
        ];
        for (group, prefix, scale) in scales {
            for token in scale.iter() {
                rows.push(TokenRow {
                    group,
                    name: format!("{}-{}", prefix, token.key),
                    leaf: token.key.clone(),
                    value: token.value.clone(),
                });
            }
        }

        Self {
            rows,
            import_url: typography.import_url.clone(),
        }
    }

    /// `@import` line followed by a `:root` block.
    pub fn to_css(&self) -> String {
        let mut css = format!("@import url(\"{}\");\n\n:root {{\n", self.import_url);
        for row in &self.rows {
            let value = match row.group {
                TokenGroup::FontFamily => format!("\"{}\"", row.value),
                _ => row.value.clone(),
            };
            css.push_str(&format!("  {}: {};\n", row.css_var(), value));
        }
        css.push('}');
        css.push('\n');
        css
    }

    /// Flat `{ name: value }` object.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .rows
            .iter()
            .map(|row| (row.name.clone(), Value::String(row.value.clone())))
            .collect();
        Value::Object(map)
    }

    /// Nested `{ group: { leaf: { value, type } } }` tree.
    pub fn to_figma(&self) -> Value {
        let mut root = Map::new();
        for row in &self.rows {
            let group = root
                .entry(row.group.figma_group())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(leaves) = group {
                leaves.insert(
                    row.leaf.clone(),
                    json!({ "value": row.value, "type": row.group.figma_type() }),
                );
            }
        }
        Value::Object(root)
    }

    pub fn to_exports(&self) -> Exports {
        Exports {
            css: self.to_css(),
            json: self.to_json(),
            figma: self.to_figma(),
        }
    }
}

/// Render all three exports for a kit.
pub fn serialize(palette: &Palette, typography: &Typography, tokens: &Tokens) -> Exports {
    TokenTable::build(palette, typography, tokens).to_exports()
}

/// Parse the custom properties out of a CSS export, in order.
///
/// Only single-line `--name: value;` declarations are returned; quotes
/// around a value are stripped.
pub fn parse_css_custom_properties(css: &str) -> Vec<(String, String)> {
    css.lines()
        .filter_map(|line| {
            let decl = line.trim().strip_prefix("--")?.strip_suffix(';')?;
            let (name, value) = decl.split_once(':')?;
            let value = value.trim().trim_matches('"');
            Some((format!("--{}", name.trim()), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::model::TokenScale;

    fn sample() -> (Palette, Typography, Tokens) {
        let palette = Palette {
            primary: "#0F5C4A".to_string(),
            secondary: "#E0607A".to_string(),
            neutral: vec!["#1C1F1E", "#4E5552", "#808A86", "#B4BBB8", "#F4F5F5"]
                .into_iter()
                .map(String::from)
                .collect(),
        };
        let typography = Typography {
            family: "Source Sans 3".to_string(),
            import_url: "https://fonts.googleapis.com/css2?family=Source+Sans+3:wght@400;500;600;700&display=swap"
                .to_string(),
        };
        let mut spacing = TokenScale::default();
        spacing.push("sm", "8px");
        spacing.push("md", "16px");
        let mut radii = TokenScale::default();
        radii.push("sm", "4px");
        let mut shadows = TokenScale::default();
        shadows.push("sm", "0 1px 3px 0px rgba(28, 31, 30, 0.1)");
        let mut opacity = TokenScale::default();
        opacity.push("sm", "0.4");
        (palette, typography, Tokens { spacing, radii, shadows, opacity })
    }

    #[test]
    fn test_css_round_trip() {
        let (palette, typography, tokens) = sample();
        let exports = serialize(&palette, &typography, &tokens);
        assert!(exports.css.starts_with("@import url(\"https://fonts.googleapis.com/"));

        let props = parse_css_custom_properties(&exports.css);
        let get = |name: &str| props.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str());
        assert_eq!(get("--color-primary"), Some("#0F5C4A"));
        assert_eq!(get("--color-neutral-100"), Some("#F4F5F5"));
        assert_eq!(get("--font-family"), Some("Source Sans 3"));
        assert_eq!(get("--spacing-md"), Some("16px"));
        assert_eq!(get("--shadows-sm"), Some("0 1px 3px 0px rgba(28, 31, 30, 0.1)"));
        assert_eq!(props.len(), 13);
    }

    #[test]
    fn test_flat_json() {
        let (palette, typography, tokens) = sample();
        let exports = serialize(&palette, &typography, &tokens);
        assert_eq!(exports.json["primary"], "#0F5C4A");
        assert_eq!(exports.json["neutral-900"], "#1C1F1E");
        assert_eq!(exports.json["font-family"], "Source Sans 3");
        assert_eq!(exports.json["radii-sm"], "4px");
    }

    #[test]
    fn test_figma_tree() {
        let (palette, typography, tokens) = sample();
        let figma = serialize(&palette, &typography, &tokens).figma;
        assert_eq!(figma["color"]["secondary"]["value"], "#E0607A");
        assert_eq!(figma["color"]["secondary"]["type"], "color");
        assert_eq!(figma["fontFamily"]["base"]["value"], "Source Sans 3");
        assert_eq!(figma["spacing"]["md"]["value"], "16px");
        assert_eq!(figma["radii"]["sm"]["type"], "borderRadius");
        assert_eq!(figma["shadow"]["sm"]["type"], "boxShadow");
        assert_eq!(figma["opacity"]["sm"]["value"], "0.4");
    }

    #[test]
    fn test_scale_rows_keep_their_group() {
        let (palette, typography, tokens) = sample();
        let table = TokenTable::build(&palette, &typography, &tokens);
        let group_of = |name: &str| table.rows.iter().find(|r| r.name == name).map(|r| r.group);
        assert_eq!(group_of("spacing-md"), Some(TokenGroup::Spacing));
        assert_eq!(group_of("radii-sm"), Some(TokenGroup::Radii));
        assert_eq!(group_of("shadows-sm"), Some(TokenGroup::Shadows));
        assert_eq!(group_of("opacity-sm"), Some(TokenGroup::Opacity));
        assert_eq!(group_of("font-family"), Some(TokenGroup::FontFamily));
    }

    #[test]
    fn test_parser_ignores_non_properties() {
        let props = parse_css_custom_properties("@import url(\"x\");\n:root {\n  color: red;\n  --a: 1px;\n}\n");
        assert_eq!(props, vec![("--a".to_string(), "1px".to_string())]);
    }
}
