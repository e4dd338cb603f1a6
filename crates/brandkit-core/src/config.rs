//! Engine configuration.
//!
//! Every threshold the palette stage depends on lives here so deployments can
//! tune them from a TOML file. Missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::Tone;
use crate::error::{BrandkitError, BrandkitResult};

/// Smallest lightness step; bounds the contrast search to 1000 iterations.
const MIN_LIGHTNESS_STEP: f64 = 0.001;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub palette: PaletteConfig,
    pub neutral: NeutralConfig,
}

/// Palette synthesis thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PaletteConfigFile")]
pub struct PaletteConfig {
    /// Minimum contrast of white text on the primary color.
    pub min_text_contrast: f64,
    /// Minimum contrast between primary and secondary.
    pub pair_contrast: f64,
    /// Hue rotation from primary to secondary, in degrees.
    pub secondary_rotation: f64,
    /// Lightness adjustment per step while searching for contrast.
    pub lightness_step: f64,
    pub vibrant: ToneConfig,
    pub muted: ToneConfig,
    pub corporate: ToneConfig,
}

/// Saturation/lightness seed for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneConfig {
    pub saturation: f64,
    pub lightness: f64,
}

/// `[palette]` as written in a config file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PaletteConfigFile {
    min_text_contrast: Option<f64>,
    pair_contrast: Option<f64>,
    secondary_rotation: Option<f64>,
    lightness_step: Option<f64>,
    vibrant: ToneOverride,
    muted: ToneOverride,
    corporate: ToneOverride,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ToneOverride {
    saturation: Option<f64>,
    lightness: Option<f64>,
}

impl ToneOverride {
    fn apply(self, base: ToneConfig) -> ToneConfig {
        ToneConfig {
            saturation: self.saturation.unwrap_or(base.saturation),
            lightness: self.lightness.unwrap_or(base.lightness),
        }
    }
}

impl From<PaletteConfigFile> for PaletteConfig {
    fn from(file: PaletteConfigFile) -> Self {
        let base = Self::default();
        Self {
            min_text_contrast: file.min_text_contrast.unwrap_or(base.min_text_contrast),
            pair_contrast: file.pair_contrast.unwrap_or(base.pair_contrast),
            secondary_rotation: file.secondary_rotation.unwrap_or(base.secondary_rotation),
            lightness_step: file.lightness_step.unwrap_or(base.lightness_step),
            vibrant: file.vibrant.apply(base.vibrant),
            muted: file.muted.apply(base.muted),
            corporate: file.corporate.apply(base.corporate),
        }
    }
}

/// Neutral ramp shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeutralConfig {
    pub saturation: f64,
    pub darkest: f64,
    pub lightest: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            min_text_contrast: 4.5,
            pair_contrast: 1.8,
            secondary_rotation: 200.0,
            lightness_step: 0.02,
            vibrant: ToneConfig { saturation: 0.75, lightness: 0.45 },
            muted: ToneConfig { saturation: 0.50, lightness: 0.42 },
            corporate: ToneConfig { saturation: 0.65, lightness: 0.38 },
        }
    }
}

impl Default for NeutralConfig {
    fn default() -> Self {
        Self {
            saturation: 0.08,
            darkest: 0.12,
            lightest: 0.96,
        }
    }
}

impl PaletteConfig {
    pub fn tone(&self, tone: Tone) -> ToneConfig {
        match tone {
            Tone::Vibrant => self.vibrant,
            Tone::Muted => self.muted,
            Tone::Corporate => self.corporate,
        }
    }
}

impl EngineConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> BrandkitResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded engine config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(raw: &str) -> BrandkitResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings under which generation could not be total.
    pub fn validate(&self) -> BrandkitResult<()> {
        let p = &self.palette;
        if !(1.0..=21.0).contains(&p.min_text_contrast) {
            return Err(BrandkitError::config(format!(
                "palette.min_text_contrast must be within [1, 21], got {}",
                p.min_text_contrast
            )));
        }
        // A white secondary always reaches min_text_contrast against primary.
        if !(1.0..=p.min_text_contrast).contains(&p.pair_contrast) {
            return Err(BrandkitError::config(format!(
                "palette.pair_contrast must be within [1, {}] (palette.min_text_contrast), got {}",
                p.min_text_contrast, p.pair_contrast
            )));
        }
        if !p.secondary_rotation.is_finite() {
            return Err(BrandkitError::config("palette.secondary_rotation must be finite"));
        }
        if !(MIN_LIGHTNESS_STEP..=0.25).contains(&p.lightness_step) {
            return Err(BrandkitError::config(format!(
                "palette.lightness_step must be within [0.001, 0.25], got {}",
                p.lightness_step
            )));
        }
        for (name, tone) in [("vibrant", p.vibrant), ("muted", p.muted), ("corporate", p.corporate)] {
            check_unit(&format!("palette.{}.saturation", name), tone.saturation)?;
            check_unit(&format!("palette.{}.lightness", name), tone.lightness)?;
        }

        let n = &self.neutral;
        check_unit("neutral.saturation", n.saturation)?;
        check_unit("neutral.darkest", n.darkest)?;
        check_unit("neutral.lightest", n.lightest)?;
        // Five 8-bit steps need visible separation to stay strictly monotonic.
        if n.lightest - n.darkest < 0.1 {
            return Err(BrandkitError::config(format!(
                "neutral.lightest ({}) must exceed neutral.darkest ({}) by at least 0.1",
                n.lightest, n.darkest
            )));
        }
        Ok(())
    }
}

fn check_unit(key: &str, value: f64) -> BrandkitResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BrandkitError::config(format!("{} must be within [0, 1], got {}", key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.min_text_contrast, 4.5);
        assert_eq!(config.palette.secondary_rotation, 200.0);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config = EngineConfig::from_toml(include_str!("../../../brandkit.example.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml(
            "[palette]\nmin_text_contrast = 7.0\n\n[palette.muted]\nsaturation = 0.3\nlightness = 0.5\n",
        )
        .unwrap();
        assert_eq!(config.palette.min_text_contrast, 7.0);
        assert_eq!(config.palette.pair_contrast, 1.8);
        assert_eq!(config.palette.muted.saturation, 0.3);
        assert_eq!(config.neutral, NeutralConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_contrast() {
        let err = EngineConfig::from_toml("[palette]\nmin_text_contrast = 30.0\n").unwrap_err();
        assert!(matches!(err, BrandkitError::Config(_)));

        let err = EngineConfig::from_toml("[palette]\npair_contrast = 5.0\n").unwrap_err();
        assert!(matches!(err, BrandkitError::Config(_)));
    }

    #[test]
    fn test_single_tone_key_keeps_other_default() {
        let config = EngineConfig::from_toml("[palette.vibrant]\nsaturation = 0.8\n").unwrap();
        assert_eq!(config.palette.vibrant.saturation, 0.8);
        assert_eq!(config.palette.vibrant.lightness, 0.45);
        assert_eq!(config.palette.muted, PaletteConfig::default().muted);
        assert_eq!(config.palette.min_text_contrast, 4.5);
    }

    #[test]
    fn test_rejects_unknown_tone_key() {
        let err = EngineConfig::from_toml("[palette.muted]\nhue = 10.0\n").unwrap_err();
        assert!(matches!(err, BrandkitError::Toml(_)));
    }

    #[test]
    fn test_pair_contrast_bounded_by_text_contrast() {
        let err = EngineConfig::from_toml("[palette]\nmin_text_contrast = 1.5\npair_contrast = 4.5\n").unwrap_err();
        assert!(err.to_string().contains("palette.pair_contrast"));

        let config = EngineConfig::from_toml("[palette]\nmin_text_contrast = 3.0\npair_contrast = 3.0\n").unwrap();
        assert_eq!(config.palette.pair_contrast, 3.0);
    }

    #[test]
    fn test_rejects_tiny_lightness_step() {
        let err = EngineConfig::from_toml("[palette]\nlightness_step = 1e-12\n").unwrap_err();
        assert!(err.to_string().contains("palette.lightness_step"));
        assert!(EngineConfig::from_toml("[palette]\nlightness_step = 0.001\n").is_ok());
    }

    #[test]
    fn test_rejects_collapsed_neutral_ramp() {
        let err = EngineConfig::from_toml("[neutral]\ndarkest = 0.5\nlightest = 0.55\n").unwrap_err();
        assert!(err.to_string().contains("neutral.lightest"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = EngineConfig::from_toml("[palette]\nmin_contrast = 4.5\n").unwrap_err();
        assert!(matches!(err, BrandkitError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[palette]\nsecondary_rotation = 150.0").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.palette.secondary_rotation, 150.0);
    }
}
