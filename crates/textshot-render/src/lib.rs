// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// textshot-render — Turns a `TextDocument` into a PNG snapshot.
//
// Provides canvas size estimation from content length, the title/body/footer
// layout, a glyph engine backed by `ab_glyph`, PNG encoding to a file sink, and
// the pipeline that sequences them.

pub mod encode;
pub mod estimate;
pub mod glyph;
pub mod layout;
pub mod pipeline;

// Re-export the primary types so callers can use `textshot_render::Renderer` etc.
pub use encode::{PngFileSink, SurfaceSink};
pub use estimate::{effective_canvas, estimate_height, estimate_width};
pub use glyph::{AbGlyphFace, AbGlyphLoader, FaceLoader, GlyphFace};
pub use layout::{DrawInstruction, Layout, LineRole, TextMeasure};
pub use pipeline::Renderer;
