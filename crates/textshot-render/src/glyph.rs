// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph engine — loads a font file and measures/draws strings onto an RGBA
// surface. The production engine uses `ab_glyph` outlines and blends coverage
// with `imageproc`'s pixel interpolation.

use std::path::Path;

use ab_glyph::{Font, FontVec, Glyph, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use imageproc::pixelops::interpolate;
use textshot_core::error::{Result, TextshotError};
use textshot_core::{Hinting, StyleConfig};
use tracing::{debug, instrument};

use crate::layout::TextMeasure;

/// A font face instantiated at a fixed size, able to draw onto a surface.
pub trait GlyphFace: TextMeasure {
    /// Draw `text` with its origin at (`x`, `baseline`). Pixels outside the
    /// surface are skipped.
    fn draw(&self, surface: &mut RgbaImage, color: Rgba<u8>, x: i32, baseline: i32, text: &str);
}

/// Produces a face from the style's font resource.
///
/// Implementations must report a missing or unreadable file as
/// `FontResourceUnreadable` and bad font data as `FontResourceUnparsable`.
pub trait FaceLoader {
    type Face: GlyphFace;

    fn load(&self, style: &StyleConfig) -> Result<Self::Face>;
}

/// Loads TrueType/OpenType files with `ab_glyph`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbGlyphLoader;

impl FaceLoader for AbGlyphLoader {
    type Face = AbGlyphFace;

    #[instrument(skip_all, fields(path = %style.font_path.display()))]
    fn load(&self, style: &StyleConfig) -> Result<AbGlyphFace> {
        let bytes = read_font(&style.font_path)?;
        AbGlyphFace::from_bytes(bytes, style)
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| TextshotError::FontResourceUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// An `ab_glyph` font scaled to the style's point size and DPI.
pub struct AbGlyphFace {
    font: FontVec,
    scale: PxScale,
    hinting: Hinting,
}

impl AbGlyphFace {
    /// Parse font bytes and scale them so one em is `size_pt * dpi / 72`
    /// pixels.
    pub fn from_bytes(bytes: Vec<u8>, style: &StyleConfig) -> Result<Self> {
        let unparsable = |reason: String| TextshotError::FontResourceUnparsable {
            path: style.font_path.clone(),
            reason,
        };

        let font = FontVec::try_from_vec(bytes).map_err(|err| unparsable(err.to_string()))?;
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| unparsable("font has no valid units-per-em".into()))?;

        // ab_glyph scales by ascent-to-descent height, not by em size.
        let scale = PxScale::from(style.px_per_em() * font.height_unscaled() / units_per_em);
        debug!(
            px_per_em = style.px_per_em(),
            scale = scale.y,
            hinting = style.hinting.as_str(),
            "font face ready"
        );

        Ok(Self {
            font,
            scale,
            hinting: style.hinting,
        })
    }

    /// Full hinting keeps every pen position on a whole pixel.
    fn snap(&self, value: f32) -> f32 {
        match self.hinting {
            Hinting::Full => value.round(),
            Hinting::None => value,
        }
    }

    /// Position each glyph of `text` relative to an origin at (0, 0), and
    /// return the total advance.
    fn glyphs(&self, text: &str) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0f32;
        let mut previous = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += self.snap(scaled.kern(prev, id));
            }
            glyphs.push(id.with_scale_and_position(self.scale, point(caret, 0.0)));
            caret += self.snap(scaled.h_advance(id));
            previous = Some(id);
        }

        (glyphs, caret)
    }
}

impl TextMeasure for AbGlyphFace {
    fn measure(&self, text: &str) -> i32 {
        self.glyphs(text).1.ceil() as i32
    }
}

impl GlyphFace for AbGlyphFace {
    fn draw(&self, surface: &mut RgbaImage, color: Rgba<u8>, x: i32, baseline: i32, text: &str) {
        let (width, height) = (surface.width() as i32, surface.height() as i32);
        let (glyphs, _) = self.glyphs(text);

        for mut glyph in glyphs {
            glyph.position.x += x as f32;
            glyph.position.y = baseline as f32;
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                // Whitespace and empty glyphs have no outline.
                continue;
            };
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);

            outlined.draw(|gx, gy, coverage| {
                let px = left + gx as i32;
                let py = top + gy as i32;
                if px < 0 || py < 0 || px >= width || py >= height {
                    return;
                }
                let pixel = surface.get_pixel_mut(px as u32, py as u32);
                *pixel = interpolate(color, *pixel, coverage.clamp(0.0, 1.0));
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_file_is_unreadable() {
        let style = StyleConfig {
            font_path: "/nonexistent/textshot/font.ttf".into(),
            ..Default::default()
        };
        match AbGlyphLoader.load(&style) {
            Err(TextshotError::FontResourceUnreadable { path, .. }) => {
                assert_eq!(path, style.font_path);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("loading a missing font should fail"),
        }
    }

    #[test]
    fn garbage_bytes_are_unparsable() {
        let style = StyleConfig {
            font_path: "garbage.ttf".into(),
            ..Default::default()
        };
        let result = AbGlyphFace::from_bytes(b"definitely not a font".to_vec(), &style);
        assert!(matches!(
            result,
            Err(TextshotError::FontResourceUnparsable { .. })
        ));
    }

    #[test]
    fn unparsable_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, [0u8; 64]).unwrap();
        let style = StyleConfig {
            font_path: path,
            ..Default::default()
        };
        assert!(matches!(
            AbGlyphLoader.load(&style),
            Err(TextshotError::FontResourceUnparsable { .. })
        ));
    }
}
