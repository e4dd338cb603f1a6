//! Read-only catalogs: sector archetypes, the font catalog and token scales.
//!
//! The built-in catalog is initialised once per process and shared by
//! reference; nothing in it is ever mutated.

use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Sector archetype a brand is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    Fintech,
    Education,
    Ecommerce,
    Health,
    Technology,
    Luxury,
    Generic,
}

/// Color tone of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Vibrant,
    Muted,
    Corporate,
}

/// Token style archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Sharp,
    Balanced,
    Soft,
}

/// Audience classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Youth,
    Professional,
    General,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fintech => "fintech",
            Self::Education => "education",
            Self::Ecommerce => "e-commerce",
            Self::Health => "health",
            Self::Technology => "technology",
            Self::Luxury => "luxury",
            Self::Generic => "generic",
        }
    }
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
            Self::Corporate => "corporate",
        }
    }
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sharp => "sharp",
            Self::Balanced => "balanced",
            Self::Soft => "soft",
        }
    }

    pub fn softer(self) -> Self {
        match self {
            Self::Sharp => Self::Balanced,
            _ => Self::Soft,
        }
    }

    pub fn sharper(self) -> Self {
        match self {
            Self::Soft => Self::Balanced,
            _ => Self::Sharp,
        }
    }
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youth => "youth",
            Self::Professional => "professional",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style profile for one sector archetype.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub keywords: &'static [&'static str],
    /// Inclusive hue range in degrees.
    pub hue_range: (f64, f64),
    pub default_hue: f64,
    pub tone: Tone,
    pub style: Style,
}

/// A freely licensed web font and where it applies.
#[derive(Debug, Clone, Serialize)]
pub struct FontEntry {
    pub family: &'static str,
    /// serif, sans-serif, display
    pub category: &'static str,
    /// Archetype and optional audience this font is curated for.
    #[serde(skip)]
    pub pairings: &'static [(Archetype, Option<Audience>)],
}

impl FontEntry {
    /// Google Fonts stylesheet URL for this family.
    pub fn import_url(&self) -> String {
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@400;500;600;700&display=swap",
            self.family.replace(' ', "+")
        )
    }
}

/// A single shadow step: `0 {y}px {blur}px {spread}px rgba(.., alpha)`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShadowStep {
    pub y: u32,
    pub blur: u32,
    pub spread: i32,
    pub alpha: f64,
}

/// Curated token scale for one style. Arrays follow `sm`, `md`, `lg`.
#[derive(Debug, Clone, Serialize)]
pub struct StyleScale {
    pub style: Style,
    /// Base unit multiplied by `SPACING_STEPS`.
    pub spacing_unit: u32,
    pub radii: [u32; 3],
    pub shadows: [ShadowStep; 3],
    pub opacity: [f64; 3],
}

pub const SPACING_KEYS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];
pub const SPACING_STEPS: [u32; 5] = [1, 2, 4, 6, 8];
pub const SCALE_KEYS: [&str; 3] = ["sm", "md", "lg"];

/// The complete read-only catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub archetypes: Vec<ArchetypeProfile>,
    pub fonts: Vec<FontEntry>,
    pub scales: Vec<StyleScale>,
    /// Index into `fonts` used when no pairing matches.
    #[serde(skip)]
    pub default_font: usize,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::build);

impl Catalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Profile for an archetype, if catalogued.
    pub fn profile(&self, archetype: Archetype) -> Option<&ArchetypeProfile> {
        self.archetypes.iter().find(|p| p.archetype == archetype)
    }

    /// First archetype whose keywords occur in `text` (already lower-cased).
    pub fn classify_sector(&self, text: &str) -> Archetype {
        self.archetypes
            .iter()
            .find(|p| p.keywords.iter().any(|k| text.contains(k)))
            .map(|p| p.archetype)
            .unwrap_or(Archetype::Generic)
    }

    /// Whether `family` is a catalogued font.
    pub fn contains_font(&self, family: &str) -> bool {
        self.fonts.iter().any(|f| f.family == family)
    }

    pub fn default_font(&self) -> Option<&FontEntry> {
        self.fonts.get(self.default_font)
    }

    pub fn scale(&self, style: Style) -> Option<&StyleScale> {
        self.scales.iter().find(|s| s.style == style)
    }

    fn build() -> Self {
        use Archetype::*;
        use Audience::*;

        let archetypes = vec![
            ArchetypeProfile {
                archetype: Fintech,
                keywords: &["fintech", "finan", "bank", "insur", "invest", "payment", "crypto", "lending", "accounting"],
                hue_range: (200.0, 235.0),
                default_hue: 220.0,
                tone: Tone::Corporate,
                style: Style::Sharp,
            },
            ArchetypeProfile {
                archetype: Education,
                keywords: &["edtech", "educa", "learning", "school", "university", "academy", "tutor", "course"],
                hue_range: (20.0, 45.0),
                default_hue: 30.0,
                tone: Tone::Vibrant,
                style: Style::Soft,
            },
            ArchetypeProfile {
                archetype: Ecommerce,
                keywords: &["commerce", "retail", "shop", "store", "marketplace", "grocery", "food"],
                hue_range: (140.0, 170.0),
                default_hue: 160.0,
                tone: Tone::Vibrant,
                style: Style::Balanced,
            },
            ArchetypeProfile {
                archetype: Health,
                keywords: &["health", "medic", "clinic", "care", "wellness", "pharma", "fitness", "salud", "bienestar"],
                hue_range: (170.0, 200.0),
                default_hue: 185.0,
                tone: Tone::Muted,
                style: Style::Soft,
            },
            ArchetypeProfile {
                archetype: Technology,
                keywords: &["tech", "software", "saas", "cloud", "developer", "cyber", "data", "platform", "tecnolog"],
                hue_range: (250.0, 285.0),
                default_hue: 265.0,
                tone: Tone::Vibrant,
                style: Style::Balanced,
            },
            ArchetypeProfile {
                archetype: Luxury,
                keywords: &["luxury", "fashion", "moda", "beauty", "cosmetic", "jewel", "premium"],
                hue_range: (30.0, 50.0),
                default_hue: 42.0,
                tone: Tone::Muted,
                style: Style::Sharp,
            },
            ArchetypeProfile {
                archetype: Generic,
                keywords: &[],
                hue_range: (220.0, 220.0),
                default_hue: 220.0,
                tone: Tone::Corporate,
                style: Style::Balanced,
            },
        ];

        let fonts = vec![
            FontEntry { family: "Inter", category: "sans-serif", pairings: &[(Ecommerce, None)] },
            FontEntry { family: "Roboto", category: "sans-serif", pairings: &[(Fintech, None)] },
            FontEntry { family: "IBM Plex Sans", category: "sans-serif", pairings: &[(Fintech, Some(Professional))] },
            FontEntry { family: "Poppins", category: "sans-serif", pairings: &[(Ecommerce, Some(Youth)), (Education, None)] },
            FontEntry { family: "Nunito", category: "sans-serif", pairings: &[(Health, None), (Education, Some(Youth))] },
            FontEntry { family: "Source Sans 3", category: "sans-serif", pairings: &[(Health, Some(Professional))] },
            FontEntry { family: "Manrope", category: "sans-serif", pairings: &[(Technology, None)] },
            FontEntry { family: "Space Grotesk", category: "sans-serif", pairings: &[(Technology, Some(Youth))] },
            FontEntry { family: "Playfair Display", category: "serif", pairings: &[(Luxury, None)] },
            FontEntry { family: "Lato", category: "sans-serif", pairings: &[(Generic, None)] },
            FontEntry { family: "Work Sans", category: "sans-serif", pairings: &[(Generic, Some(Professional))] },
            FontEntry { family: "Montserrat", category: "sans-serif", pairings: &[(Generic, Some(Youth))] },
        ];

        let scales = vec![
            StyleScale {
                style: Style::Sharp,
                spacing_unit: 3,
                radii: [2, 4, 6],
                shadows: [
                    ShadowStep { y: 1, blur: 2, spread: 0, alpha: 0.2 },
                    ShadowStep { y: 2, blur: 4, spread: 0, alpha: 0.24 },
                    ShadowStep { y: 4, blur: 8, spread: 0, alpha: 0.28 },
                ],
                opacity: [0.5, 0.7, 0.9],
            },
            StyleScale {
                style: Style::Balanced,
                spacing_unit: 4,
                radii: [4, 8, 12],
                shadows: [
                    ShadowStep { y: 1, blur: 3, spread: 0, alpha: 0.1 },
                    ShadowStep { y: 4, blur: 6, spread: -1, alpha: 0.12 },
                    ShadowStep { y: 10, blur: 15, spread: -3, alpha: 0.14 },
                ],
                opacity: [0.4, 0.6, 0.8],
            },
            StyleScale {
                style: Style::Soft,
                spacing_unit: 5,
                radii: [8, 14, 20],
                shadows: [
                    ShadowStep { y: 2, blur: 6, spread: 0, alpha: 0.08 },
                    ShadowStep { y: 6, blur: 16, spread: 0, alpha: 0.1 },
                    ShadowStep { y: 14, blur: 32, spread: 0, alpha: 0.12 },
                ],
                opacity: [0.3, 0.55, 0.8],
            },
        ];

        Self {
            archetypes,
            fonts,
            scales,
            default_font: 0,
        }
    }
}
