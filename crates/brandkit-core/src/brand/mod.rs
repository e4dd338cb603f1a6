//! Attribute normalization.
//!
//! Trims and validates the five brand attributes, then classifies them into
//! the hints the synthesis stages need. Pure: same input, same output.

pub mod model;

use sha2::{Digest, Sha256};

use crate::catalog::{Audience, Catalog};
use crate::error::{BrandkitError, BrandkitResult};
use model::{BrandInput, NormalizedBrand};

const YOUTH_TERMS: &[&str] = &[
    "gen z", "teen", "student", "young", "millennial", "kid", "child", "joven",
];
const PROFESSIONAL_TERMS: &[&str] = &[
    "business", "enterprise", "professional", "b2b", "executive", "compan", "empresa", "developer", "team",
];
const ENERGETIC_TERMS: &[&str] = &[
    "fun", "playful", "bold", "creative", "innovat", "vibrant", "energ", "adventur", "joy", "passion",
];
const SERIOUS_TERMS: &[&str] = &[
    "trust", "secur", "professional", "reliab", "stabil", "precis", "elegan", "premium", "rigor", "confian",
];

const TONE_LIMIT: i32 = 5;

/// Reject input with any blank field, listing all of them.
pub fn validate(input: &BrandInput) -> BrandkitResult<()> {
    let empty: Vec<&str> = input
        .fields()
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if empty.is_empty() {
        Ok(())
    } else {
        Err(BrandkitError::validation(empty))
    }
}

/// Validate and normalize a brand input.
pub fn normalize(input: &BrandInput, catalog: &Catalog) -> BrandkitResult<NormalizedBrand> {
    validate(input)?;

    let display = BrandInput::new(
        input.name.trim(),
        input.mission.trim(),
        input.values.trim(),
        input.audience.trim(),
        input.sector.trim(),
    );
    let lowered = BrandInput::new(
        display.name.to_lowercase(),
        display.mission.to_lowercase(),
        display.values.to_lowercase(),
        display.audience.to_lowercase(),
        display.sector.to_lowercase(),
    );

    let value_terms = display
        .values
        .split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let archetype = catalog.classify_sector(&lowered.sector);
    let audience = classify_audience(&lowered.audience);
    let tone_score = tone_score(&lowered.mission, &lowered.values);
    let seed = seed_for(&lowered);

    Ok(NormalizedBrand {
        display,
        lowered,
        value_terms,
        archetype,
        audience,
        tone_score,
        seed,
    })
}

fn classify_audience(audience: &str) -> Audience {
    if YOUTH_TERMS.iter().any(|t| audience.contains(t)) {
        Audience::Youth
    } else if PROFESSIONAL_TERMS.iter().any(|t| audience.contains(t)) {
        Audience::Professional
    } else {
        Audience::General
    }
}

fn tone_score(mission: &str, values: &str) -> i32 {
    let text = format!("{} {}", mission, values);
    let count = |terms: &[&str]| terms.iter().filter(|t| text.contains(*t)).count() as i32;
    (count(ENERGETIC_TERMS) - count(SERIOUS_TERMS)).clamp(-TONE_LIMIT, TONE_LIMIT)
}

fn seed_for(lowered: &BrandInput) -> u64 {
    let mut hasher = Sha256::new();
    for (i, (_, value)) in lowered.fields().iter().enumerate() {
        if i > 0 {
            hasher.update([0x1f]);
        }
        hasher.update(value.as_bytes());
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
