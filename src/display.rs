//! Presentation of frames to the outside world

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::render::Frame;

/// Consumes the frames produced by the game
pub trait Renderer {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

/// Output formats of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Board and status as plain text
    Text,
    /// One JSON frame with draw commands per line
    Json,
}

/// Writes each frame as a line of JSON
#[derive(Debug)]
pub struct JsonRenderer<W> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        serde_json::to_writer(&mut self.writer, frame).context("Failed to encode frame")?;
        writeln!(self.writer)?;
        self.writer.flush().context("Failed to flush frame")
    }
}

/// Writes the board followed by the status line
#[derive(Debug)]
pub struct TextRenderer<W> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        write!(
            self.writer,
            "{board}{status}\n\n",
            board = frame.snapshot.board,
            status = frame.snapshot.status
        )?;
        self.writer.flush().context("Failed to flush frame")
    }
}

/// Renderer writing to `writer` in the given format
pub fn renderer<W: Write + 'static>(format: Format, writer: W) -> Box<dyn Renderer> {
    match format {
        Format::Text => Box::new(TextRenderer::new(writer)),
        Format::Json => Box::new(JsonRenderer::new(writer)),
    }
}
