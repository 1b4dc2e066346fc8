// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rendering style configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextshotError};
use crate::types::Polarity;

/// Largest em size or line step, in pixels, a style may produce.
pub const MAX_GLYPH_PX: f32 = 4096.0;

/// Glyph hinting mode.
///
/// Parsed leniently: `"full"` enables hinting, every other value (including an
/// empty string) selects no hinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Hinting {
    #[default]
    None,
    Full,
}

impl Hinting {
    pub fn from_name(name: &str) -> Self {
        match name {
            "full" => Hinting::Full,
            _ => Hinting::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hinting::None => "none",
            Hinting::Full => "full",
        }
    }
}

impl From<String> for Hinting {
    fn from(name: String) -> Self {
        Hinting::from_name(&name)
    }
}

impl From<Hinting> for String {
    fn from(hinting: Hinting) -> Self {
        hinting.as_str().to_string()
    }
}

/// Fixed per-renderer style settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Dots per inch used to convert point sizes to pixels.
    pub dpi: f32,
    /// TrueType/OpenType font file to draw with.
    pub font_path: PathBuf,
    pub hinting: Hinting,
    /// Font size in points.
    pub size_pt: f32,
    /// Multiplier applied to the line height to get the row step.
    pub line_spacing: f32,
    /// White text on black instead of black on white.
    pub invert_polarity: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            dpi: 72.0,
            font_path: PathBuf::new(),
            hinting: Hinting::None,
            size_pt: 12.0,
            line_spacing: 1.0,
            invert_polarity: false,
        }
    }
}

impl StyleConfig {
    /// Read a style from a JSON file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Reject settings that would produce a degenerate layout.
    pub fn validate(&self) -> Result<()> {
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(TextshotError::Config(format!(
                "dpi must be positive, got {}",
                self.dpi
            )));
        }
        if !(self.size_pt.is_finite() && self.size_pt > 0.0) {
            return Err(TextshotError::Config(format!(
                "size_pt must be positive, got {}",
                self.size_pt
            )));
        }
        if !(self.line_spacing.is_finite() && self.line_spacing > 0.0) {
            return Err(TextshotError::Config(format!(
                "line_spacing must be positive, got {}",
                self.line_spacing
            )));
        }
        let step = self.size_pt * self.line_spacing * self.dpi / 72.0;
        if self.px_per_em() > MAX_GLYPH_PX || step > MAX_GLYPH_PX {
            return Err(TextshotError::Config(format!(
                "font size {:.0}px / line step {:.0}px exceeds {MAX_GLYPH_PX}px",
                self.px_per_em(),
                step
            )));
        }
        if self.font_path.as_os_str().is_empty() {
            return Err(TextshotError::Config("font_path is not set".into()));
        }
        Ok(())
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_inverted(self.invert_polarity)
    }

    /// Font size in device pixels per em.
    pub fn px_per_em(&self) -> f32 {
        self.size_pt * self.dpi / 72.0
    }

    /// Ascent approximation used for the first baseline, in whole pixels.
    pub fn ascent_px(&self) -> i32 {
        self.px_per_em().ceil() as i32
    }

    /// Vertical distance between consecutive baselines, in whole pixels.
    pub fn line_step_px(&self) -> i32 {
        (self.size_pt * self.line_spacing * self.dpi / 72.0).ceil() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StyleConfig {
        StyleConfig {
            font_path: PathBuf::from("/fonts/mono.ttf"),
            ..Default::default()
        }
    }

    #[test]
    fn hinting_parses_leniently() {
        assert_eq!(Hinting::from_name("full"), Hinting::Full);
        assert_eq!(Hinting::from_name("none"), Hinting::None);
        assert_eq!(Hinting::from_name(""), Hinting::None);
        assert_eq!(Hinting::from_name("FULL"), Hinting::None);
        assert_eq!(Hinting::from_name("vertical"), Hinting::None);
    }

    #[test]
    fn style_json_with_missing_keys_uses_defaults() {
        let cfg: StyleConfig =
            serde_json::from_str(r#"{"font_path":"a.ttf","hinting":"full","size_pt":20}"#)
                .unwrap();
        assert_eq!(cfg.hinting, Hinting::Full);
        assert_eq!(cfg.size_pt, 20.0);
        assert_eq!(cfg.dpi, 72.0);
        assert!(!cfg.invert_polarity);

        let cfg: StyleConfig = serde_json::from_str(r#"{"hinting":"bogus"}"#).unwrap();
        assert_eq!(cfg.hinting, Hinting::None);
    }

    #[test]
    fn pixel_metrics_round_up() {
        let cfg = StyleConfig {
            dpi: 72.0,
            size_pt: 12.0,
            line_spacing: 1.5,
            ..style()
        };
        assert_eq!(cfg.ascent_px(), 12);
        assert_eq!(cfg.line_step_px(), 18);

        let cfg = StyleConfig {
            dpi: 96.0,
            size_pt: 10.0,
            line_spacing: 1.0,
            ..style()
        };
        // 10 * 96 / 72 = 13.33..
        assert_eq!(cfg.ascent_px(), 14);
        assert_eq!(cfg.line_step_px(), 14);
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        assert!(style().validate().is_ok());
        assert!(StyleConfig::default().validate().is_err());
        let zero_dpi = StyleConfig { dpi: 0.0, ..style() };
        assert!(matches!(zero_dpi.validate(), Err(TextshotError::Config(_))));
        let nan_size = StyleConfig {
            size_pt: f32::NAN,
            ..style()
        };
        assert!(nan_size.validate().is_err());
    }

    #[test]
    fn validate_rejects_oversized_metrics() {
        let huge = StyleConfig {
            size_pt: 1.0e9,
            ..style()
        };
        assert!(matches!(huge.validate(), Err(TextshotError::Config(_))));
        let wide_spacing = StyleConfig {
            size_pt: 100.0,
            line_spacing: 100.0,
            ..style()
        };
        assert!(wide_spacing.validate().is_err());
        let largest = StyleConfig {
            size_pt: MAX_GLYPH_PX,
            ..style()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        let cfg = StyleConfig {
            hinting: Hinting::Full,
            invert_polarity: true,
            ..style()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
        assert_eq!(StyleConfig::load(&path).unwrap(), cfg);
    }
}
