// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canvas size estimation from content length. Runs without a font so that a
// size can be chosen before the font is loaded.

use textshot_core::{CanvasSpec, TextDocument};

/// Approximate advance of one character, in pixels.
const WIDTH_PER_CHAR: i64 = 10;
/// Lines at or below this many characters get the wider padding.
const NARROW_LINE_CHARS: usize = 45;
const HEIGHT_PER_ROW: i64 = 18;

/// Character count (in code points) used to size the canvas width.
///
/// Only the first body line is sampled, then widened by the title or footer
/// if either is longer.
pub fn representative_line_length(doc: &TextDocument) -> usize {
    let first = doc
        .body_lines
        .first()
        .map(|line| line.chars().count())
        .unwrap_or(0);
    first
        .max(doc.title.chars().count())
        .max(doc.footer.chars().count())
}

/// Canvas width for a line of `line_len` characters, unless `requested` is
/// non-zero.
pub fn estimate_width(line_len: usize, requested: u32) -> u32 {
    if requested != 0 {
        return requested;
    }
    let extra = if line_len > NARROW_LINE_CHARS { 10 } else { 15 };
    clamp_px(WIDTH_PER_CHAR * line_len as i64 + extra)
}

/// Canvas height for `rows` body rows, unless `requested` is non-zero.
///
/// Above three rows the fixed padding is replaced by `-(rows - 25) * 2`,
/// which turns negative past 25 rows.
pub fn estimate_height(rows: usize, requested: u32) -> u32 {
    if requested != 0 {
        return requested;
    }
    let rows = rows as i64;
    let extra = match rows {
        0 => 100,
        1..=3 => 45,
        _ => -((rows - 25) * 2),
    };
    clamp_px(HEIGHT_PER_ROW * rows + extra)
}

/// Fill in any zero dimension of `requested` from the document content.
pub fn effective_canvas(doc: &TextDocument, requested: CanvasSpec) -> CanvasSpec {
    CanvasSpec {
        width: estimate_width(representative_line_length(doc), requested.width),
        height: estimate_height(doc.row_count(), requested.height),
    }
}

fn clamp_px(value: i64) -> u32 {
    value.clamp(1, u32::MAX as i64) as u32
}
