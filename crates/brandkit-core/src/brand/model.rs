//! Brand input and its normalized form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Archetype, Audience};

/// The five free-text brand attributes submitted by a client.
///
/// Absent and `null` fields deserialize as empty strings so that validation can report
/// every missing or blank field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mission: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub values: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub audience: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sector: String,
}

impl BrandInput {
    pub fn new(
        name: impl Into<String>,
        mission: impl Into<String>,
        values: impl Into<String>,
        audience: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mission: mission.into(),
            values: values.into(),
            audience: audience.into(),
            sector: sector.into(),
        }
    }

    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("mission", self.mission.as_str()),
            ("values", self.values.as_str()),
            ("audience", self.audience.as_str()),
            ("sector", self.sector.as_str()),
        ]
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Engine-internal record derived from a validated [`BrandInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBrand {
    /// Trimmed copy of the input, used for display.
    pub display: BrandInput,
    /// Trimmed, lower-cased copy used for matching.
    pub lowered: BrandInput,
    /// Individual terms from `values`, split on commas and semicolons.
    pub value_terms: Vec<String>,
    pub archetype: Archetype,
    pub audience: Audience,
    /// Positive for energetic missions/values, negative for serious ones.
    pub tone_score: i32,
    /// Deterministic seed derived from the lowered text.
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let input: BrandInput =
            serde_json::from_str(r#"{"name":"Acme","mission":null,"sector":"retail"}"#).unwrap();
        assert_eq!(input.name, "Acme");
        assert_eq!(input.mission, "");
        assert_eq!(input.values, "");
        assert_eq!(input.sector, "retail");
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        assert!(serde_json::from_str::<BrandInput>(r#"{"name":42}"#).is_err());
    }
}
