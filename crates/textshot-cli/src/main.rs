// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// textshot — render a short text document to a PNG snapshot.
//
// Entry point. Initialises logging, assembles the style and document from the
// config file and flags, renders, and prints a JSON summary of the image.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use textshot_core::{CanvasSpec, Hinting, Result, StyleConfig, TextDocument};
use textshot_render::Renderer;

/// Render a title, body lines and a footer into a PNG image.
#[derive(Debug, Parser)]
#[command(name = "textshot", version, about)]
struct Args {
    /// Style configuration (JSON). Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document to render (JSON with title, body_lines, footer).
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Where to write the PNG.
    #[arg(short, long)]
    output: PathBuf,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    footer: Option<String>,

    /// Canvas width in pixels; 0 estimates it from the text.
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Canvas height in pixels; 0 estimates it from the row count.
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Font file, overriding the config.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in points.
    #[arg(long)]
    size: Option<f32>,

    #[arg(long)]
    dpi: Option<f32>,

    /// Line spacing multiplier.
    #[arg(long)]
    spacing: Option<f32>,

    /// Hinting mode: "full" or anything else for none.
    #[arg(long)]
    hinting: Option<String>,

    /// White text on black.
    #[arg(long)]
    invert: bool,

    /// Body lines. Replace the document's body when given.
    lines: Vec<String>,
}

impl Args {
    fn style(&self) -> Result<StyleConfig> {
        let mut style = match &self.config {
            Some(path) => StyleConfig::load(path)?,
            None => StyleConfig::default(),
        };
        if let Some(font) = &self.font {
            style.font_path = font.clone();
        }
        if let Some(size) = self.size {
            style.size_pt = size;
        }
        if let Some(dpi) = self.dpi {
            style.dpi = dpi;
        }
        if let Some(spacing) = self.spacing {
            style.line_spacing = spacing;
        }
        if let Some(hinting) = &self.hinting {
            style.hinting = Hinting::from_name(hinting);
        }
        if self.invert {
            style.invert_polarity = true;
        }
        Ok(style)
    }

    fn document(&self) -> Result<TextDocument> {
        let mut doc = match &self.document {
            Some(path) => TextDocument::load(path)?,
            None => TextDocument::default(),
        };
        if let Some(title) = &self.title {
            doc.title = title.clone();
        }
        if let Some(footer) = &self.footer {
            doc.footer = footer.clone();
        }
        if !self.lines.is_empty() {
            doc.body_lines = self.lines.clone();
        }
        Ok(doc)
    }
}

fn run(args: &Args) -> Result<()> {
    let renderer = Renderer::new(args.style()?)?;
    let doc = args.document()?;
    let image = renderer.render(
        &doc,
        CanvasSpec::new(args.width, args.height),
        &args.output,
    )?;
    println!("{}", serde_json::to_string_pretty(&image)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "textshot failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_build_style_and_document() {
        let args = parse(&[
            "textshot", "-o", "out.png", "--font", "mono.ttf", "--size", "14", "--hinting",
            "full", "--invert", "--title", "Report", "--footer", "end", "line one", "line two",
        ]);
        let style = args.style().unwrap();
        assert_eq!(style.font_path, PathBuf::from("mono.ttf"));
        assert_eq!(style.size_pt, 14.0);
        assert_eq!(style.hinting, Hinting::Full);
        assert!(style.invert_polarity);
        assert_eq!(style.dpi, 72.0);

        let doc = args.document().unwrap();
        assert_eq!(doc.title, "Report");
        assert_eq!(doc.body_lines, ["line one", "line two"]);
        assert_eq!(doc.footer, "end");
        assert_eq!((args.width, args.height), (0, 0));
    }

    #[test]
    fn files_are_overridden_by_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("style.json");
        let document = dir.path().join("doc.json");
        std::fs::write(&config, r#"{"font_path":"a.ttf","dpi":96,"hinting":"full"}"#).unwrap();
        std::fs::write(
            &document,
            r#"{"title":"From file","body_lines":["one","two"],"footer":"f"}"#,
        )
        .unwrap();

        let args = parse(&[
            "textshot",
            "-c",
            config.to_str().unwrap(),
            "-d",
            document.to_str().unwrap(),
            "-o",
            "out.png",
            "--hinting",
            "none",
            "--title",
            "Flag title",
        ]);
        let style = args.style().unwrap();
        assert_eq!(style.font_path, PathBuf::from("a.ttf"));
        assert_eq!(style.dpi, 96.0);
        assert_eq!(style.hinting, Hinting::None);

        let doc = args.document().unwrap();
        assert_eq!(doc.title, "Flag title");
        assert_eq!(doc.body_lines, ["one", "two"]);
        assert_eq!(doc.footer, "f");
    }

    #[test]
    fn output_is_required() {
        assert!(Args::try_parse_from(["textshot", "line"]).is_err());
    }
}
