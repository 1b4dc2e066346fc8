// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text layout — places the title, body lines and footer on the canvas.
//
// The title is centered, body lines and the footer are left-aligned at fixed
// margins. A single vertical cursor walks down the canvas; nothing wraps and
// content past the canvas edge is clipped when drawn.

use textshot_core::{CanvasSpec, StyleConfig, TextDocument};
use tracing::debug;

/// Space above the first baseline, on top of the ascent.
pub const TOP_MARGIN: i32 = 10;
/// Left edge of body lines.
pub const BODY_MARGIN: i32 = 10;
/// Left edge of the footer.
pub const FOOTER_MARGIN: i32 = 20;

/// Measures the advance width of a string in device pixels.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> i32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str) -> i32 {
        (**self).measure(text)
    }
}

/// Which part of the document a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Body,
    Footer,
}

/// One string to draw, with its left edge and baseline in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawInstruction<'a> {
    pub text: &'a str,
    pub x: i32,
    /// Baseline.
    pub y: i32,
    pub role: LineRole,
}

/// Ordered draw instructions plus where the cursor stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    pub instructions: Vec<DrawInstruction<'a>>,
    /// Cursor after the last advance; always at or below every baseline.
    pub end_y: i32,
}

impl Layout<'_> {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Lay out `doc` for a canvas of the given size.
pub fn layout<'a>(
    doc: &'a TextDocument,
    style: &StyleConfig,
    canvas: CanvasSpec,
    measure: &impl TextMeasure,
) -> Layout<'a> {
    let dy = style.line_step_px();
    let mut y = TOP_MARGIN.saturating_add(style.ascent_px());
    let mut instructions = Vec::with_capacity(doc.row_count() + 2);

    if doc.has_title() {
        let width = measure.measure(&doc.title);
        let canvas_width = i32::try_from(canvas.width).unwrap_or(i32::MAX);
        let x = canvas_width.saturating_sub(width) / 2;
        instructions.push(DrawInstruction {
            text: &doc.title,
            x,
            y,
            role: LineRole::Title,
        });
        y = y.saturating_add(dy);
    }

    for line in &doc.body_lines {
        instructions.push(DrawInstruction {
            text: line,
            x: BODY_MARGIN,
            y,
            role: LineRole::Body,
        });
        y = y.saturating_add(dy);
    }

    if doc.has_footer() {
        let footer_y = y;
        y = y.saturating_add(dy);
        instructions.push(DrawInstruction {
            text: &doc.footer,
            x: FOOTER_MARGIN,
            y: footer_y,
            role: LineRole::Footer,
        });
    }

    debug!(
        lines = instructions.len(),
        line_step = dy,
        end_y = y,
        canvas = %canvas,
        "layout computed"
    );

    Layout {
        instructions,
        end_y: y,
    }
}
