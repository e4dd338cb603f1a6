//! Design kit domain model.
//!
//! The palette, typography and token groups produced for one brand, plus the
//! `UxKit` response that bundles them with their exports.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primary/secondary pair and a neutral ramp, as `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    /// Five colors, darkest to lightest.
    pub neutral: Vec<String>,
}

/// Chosen font family and its stylesheet URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub family: String,
    pub import_url: String,
}

/// A single named token value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValue {
    pub key: String,
    pub value: String,
}

/// An ordered group of tokens. Serialized as a JSON object in key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenScale(pub Vec<TokenValue>);

impl TokenScale {
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push(TokenValue {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|t| t.key == key).map(|t| t.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TokenScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for token in &self.0 {
            map.serialize_entry(&token.key, &token.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TokenScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = TokenScale;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of token names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TokenScale, A::Error> {
                let mut scale = TokenScale::default();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    scale.push(key, value);
                }
                Ok(scale)
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

/// Secondary design tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub spacing: TokenScale,
    pub radii: TokenScale,
    pub shadows: TokenScale,
    pub opacity: TokenScale,
}

impl Tokens {
    /// Groups with their names, in export order.
    pub fn groups(&self) -> [(&'static str, &TokenScale); 4] {
        [
            ("spacing", &self.spacing),
            ("radii", &self.radii),
            ("shadows", &self.shadows),
            ("opacity", &self.opacity),
        ]
    }
}

/// The three serialized renderings of a kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exports {
    pub css: String,
    pub json: serde_json::Value,
    pub figma: serde_json::Value,
}

/// Complete generation result returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UxKit {
    pub explanation: String,
    pub palette: Palette,
    pub typography: Typography,
    pub tokens: Tokens,
    pub exports: Exports,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_scale_keeps_order() {
        let mut scale = TokenScale::default();
        scale.push("sm", "4px");
        scale.push("md", "8px");
        scale.push("lg", "12px");
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(json, r#"{"sm":"4px","md":"8px","lg":"12px"}"#);

        let back: TokenScale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scale);
        assert_eq!(back.get("md"), Some("8px"));
    }

    #[test]
    fn test_typography_uses_camel_case() {
        let t = Typography {
            family: "Inter".to_string(),
            import_url: "https://example.test".to_string(),
        };
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["importUrl"], "https://example.test");
    }
}
