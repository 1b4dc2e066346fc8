// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for textshot.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextshotError};

/// The text to render: an optional title, one or more body lines, and an
/// optional footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextDocument {
    /// Centered heading. Empty means no title row.
    #[serde(default)]
    pub title: String,
    /// Body rows, drawn top to bottom in order. Must not be empty.
    pub body_lines: Vec<String>,
    /// Trailing line. Empty means no footer row.
    #[serde(default)]
    pub footer: String,
}

impl TextDocument {
    pub fn new(
        title: impl Into<String>,
        body_lines: Vec<String>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body_lines,
            footer: footer.into(),
        }
    }

    /// Load a document from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let doc: Self = serde_json::from_str(&data)?;
        Ok(doc)
    }

    /// Reject documents the renderer cannot lay out.
    pub fn validate(&self) -> Result<()> {
        if self.body_lines.is_empty() {
            return Err(TextshotError::EmptyDocument);
        }
        Ok(())
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_footer(&self) -> bool {
        !self.footer.is_empty()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.body_lines.len()
    }
}

/// Requested or effective canvas size in pixels.
///
/// A zero dimension in a request means "estimate from content"; an effective
/// canvas always has both dimensions greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    pub const AUTO: CanvasSpec = CanvasSpec {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when neither dimension needs estimating.
    pub fn is_resolved(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl std::fmt::Display for CanvasSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Foreground/background color pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Black text on a white background.
    DarkOnLight,
    /// White text on a black background.
    LightOnDark,
}

impl Polarity {
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Polarity::LightOnDark
        } else {
            Polarity::DarkOnLight
        }
    }

    /// RGBA used to fill the canvas.
    pub fn background(&self) -> [u8; 4] {
        match self {
            Polarity::DarkOnLight => [0xff, 0xff, 0xff, 0xff],
            Polarity::LightOnDark => [0x00, 0x00, 0x00, 0xff],
        }
    }

    /// RGBA used for glyph coverage.
    pub fn foreground(&self) -> [u8; 4] {
        match self {
            Polarity::DarkOnLight => [0x00, 0x00, 0x00, 0xff],
            Polarity::LightOnDark => [0xff, 0xff, 0xff, 0xff],
        }
    }
}

/// Summary of a successfully written image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    /// Where the PNG was written.
    pub path: PathBuf,
    /// Lowercase hex SHA-256 of the encoded PNG bytes.
    pub sha256: String,
}
