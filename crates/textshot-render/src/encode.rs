// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PNG encoding and the file sink the encoded bytes are written to.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};
use textshot_core::error::{Result, TextshotError};
use tracing::{debug, instrument, warn};

/// Destination for an encoded image.
pub trait SurfaceSink {
    /// Persist `png` at `path`, flushing before returning. Failures are
    /// reported as `OutputSinkUnavailable`.
    fn write(&self, png: &[u8], path: &Path) -> Result<()>;
}

/// Writes the image to the local file system through a buffered writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFileSink;

impl SurfaceSink for PngFileSink {
    #[instrument(skip(self, png), fields(path = %path.display(), png_len = png.len()))]
    fn write(&self, png: &[u8], path: &Path) -> Result<()> {
        let sink_error = |source: std::io::Error| TextshotError::OutputSinkUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(sink_error)?;
        let mut writer = BufWriter::new(file);
        let written = writer.write_all(png).and_then(|()| writer.flush());

        if let Err(err) = written {
            drop(writer);
            // Don't leave a truncated PNG behind.
            if let Err(remove_err) = std::fs::remove_file(path) {
                warn!(error = %remove_err, "could not remove partial output");
            }
            return Err(sink_error(err));
        }

        debug!("image flushed");
        Ok(())
    }
}

/// Encode the surface as PNG bytes.
pub fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    surface
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|err| TextshotError::ImageEncoding(err.to_string()))?;
    Ok(buffer)
}

/// SHA-256 of `data` as a lowercase hex string.
pub fn fingerprint(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
