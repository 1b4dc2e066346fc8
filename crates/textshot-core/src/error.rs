// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for textshot.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all textshot operations.
#[derive(Debug, Error)]
pub enum TextshotError {
    // -- Font resource --
    #[error("cannot read font resource {}: {source}", path.display())]
    FontResourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse font resource {}: {reason}", path.display())]
    FontResourceUnparsable { path: PathBuf, reason: String },

    // -- Output --
    #[error("cannot write image to {}: {source}", path.display())]
    OutputSinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    ImageEncoding(String),

    // -- Input --
    #[error("document has no body lines")]
    EmptyDocument,

    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TextshotError>;
