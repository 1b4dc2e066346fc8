// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Render pipeline — sizes the canvas, loads the font, paints the background,
// draws the laid-out lines, encodes PNG and hands it to the sink.
//
// Steps run in a fixed order with no retries. Failures before encoding leave
// no file behind; sink failures are returned to the caller rather than
// terminating the process.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use textshot_core::error::{Result, TextshotError};
use textshot_core::{CanvasSpec, RenderedImage, StyleConfig, TextDocument};
use tracing::{debug, error, info, instrument};

use crate::encode::{PngFileSink, SurfaceSink, encode_png, fingerprint};
use crate::estimate::effective_canvas;
use crate::glyph::{AbGlyphLoader, FaceLoader, GlyphFace};
use crate::layout::layout;

/// Renders documents with a fixed style.
///
/// Holds no per-call state, so one renderer can serve many calls (including
/// from several threads) as long as each call writes to its own path.
///
/// ```ignore
/// let renderer = Renderer::new(StyleConfig::load("style.json")?)?;
/// let doc = TextDocument::new("Report", vec!["line one".into()], "end");
/// let image = renderer.render(&doc, CanvasSpec::AUTO, "report.png")?;
/// println!("{}x{} {}", image.width, image.height, image.sha256);
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<L = AbGlyphLoader, S = PngFileSink> {
    style: StyleConfig,
    loader: L,
    sink: S,
}

impl Renderer {
    /// Create a renderer using `ab_glyph` and the file-system PNG sink.
    pub fn new(style: StyleConfig) -> Result<Self> {
        style.validate()?;
        Ok(Self::with_capabilities(style, AbGlyphLoader, PngFileSink))
    }
}

impl<L: FaceLoader, S: SurfaceSink> Renderer<L, S> {
    /// Create a renderer with custom glyph engine and sink implementations.
    /// The style is used as given.
    pub fn with_capabilities(style: StyleConfig, loader: L, sink: S) -> Self {
        Self {
            style,
            loader,
            sink,
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    // -- Rendering ------------------------------------------------------------

    /// Render `doc` to an in-memory surface.
    ///
    /// Zero dimensions in `requested` are estimated from the content.
    #[instrument(skip_all, fields(rows = doc.row_count(), requested = %requested))]
    pub fn render_surface(&self, doc: &TextDocument, requested: CanvasSpec) -> Result<RgbaImage> {
        doc.validate()?;
        let canvas = effective_canvas(doc, requested);
        info!(canvas = %canvas, "canvas resolved");

        let face = self.loader.load(&self.style)?;

        let polarity = self.style.polarity();
        let mut surface = allocate(canvas)?;
        draw_filled_rect_mut(
            &mut surface,
            Rect::at(0, 0).of_size(canvas.width, canvas.height),
            Rgba(polarity.background()),
        );

        let foreground = Rgba(polarity.foreground());
        let lines = layout(doc, &self.style, canvas, &face);
        for line in &lines.instructions {
            debug!(role = ?line.role, x = line.x, y = line.y, "drawing line");
            face.draw(&mut surface, foreground, line.x, line.y, line.text);
        }

        Ok(surface)
    }

    /// Render `doc` and return the effective canvas with the PNG bytes.
    pub fn render_png(
        &self,
        doc: &TextDocument,
        requested: CanvasSpec,
    ) -> Result<(CanvasSpec, Vec<u8>)> {
        let surface = self.render_surface(doc, requested)?;
        let canvas = CanvasSpec::new(surface.width(), surface.height());
        let png = encode_png(&surface)?;
        Ok((canvas, png))
    }

    /// Render `doc` and write it as a PNG file at `output`.
    #[instrument(skip_all, fields(output = %output.as_ref().display()))]
    pub fn render(
        &self,
        doc: &TextDocument,
        requested: CanvasSpec,
        output: impl AsRef<Path>,
    ) -> Result<RenderedImage> {
        let output = output.as_ref();
        let (canvas, png) = self.render_png(doc, requested)?;
        self.sink.write(&png, output)?;

        let sha256 = fingerprint(&png);
        info!(
            width = canvas.width,
            height = canvas.height,
            png_len = png.len(),
            sha256 = %sha256,
            "image written"
        );

        Ok(RenderedImage {
            width: canvas.width,
            height: canvas.height,
            path: output.to_path_buf(),
            sha256,
        })
    }

    /// Flat-argument entry point that reports success as a boolean.
    ///
    /// Errors are logged and swallowed; use [`Renderer::render`] to inspect
    /// them.
    pub fn render_text<I, T>(
        &self,
        title: &str,
        body_lines: I,
        footer: &str,
        width: u32,
        height: u32,
        output: impl AsRef<Path>,
    ) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let doc = TextDocument::new(
            title,
            body_lines.into_iter().map(Into::into).collect(),
            footer,
        );
        match self.render(&doc, CanvasSpec::new(width, height), output) {
            Ok(_) => true,
            Err(err) => {
                error!(error = %err, "render failed");
                false
            }
        }
    }
}

/// Longest canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;
/// Largest canvas area, in pixels (256 MiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

/// Allocate a transparent surface, refusing empty or oversized canvases.
fn allocate(canvas: CanvasSpec) -> Result<RgbaImage> {
    if !canvas.is_resolved() {
        return Err(TextshotError::Config(format!(
            "canvas {canvas} has a zero dimension"
        )));
    }
    let pixels = u64::from(canvas.width) * u64::from(canvas.height);
    if canvas.width > MAX_CANVAS_SIDE
        || canvas.height > MAX_CANVAS_SIDE
        || pixels > MAX_CANVAS_PIXELS
    {
        return Err(TextshotError::Config(format!(
            "canvas {canvas} exceeds {MAX_CANVAS_SIDE}px per side or {MAX_CANVAS_PIXELS} pixels"
        )));
    }
    Ok(RgbaImage::new(canvas.width, canvas.height))
}
