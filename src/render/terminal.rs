//! Terminal surface
//!
//! Draws frames to any writer with crossterm. The kinetic skin redraws the
//! whole card in place; the minimal skin rewrites a single line; the JSON
//! skin appends one line per state. With redraw off, as for pipes, every
//! skin appends plain frames without cursor movement.

use crossterm::{
    cursor::{Hide, MoveTo, MoveToPreviousLine, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::Write;

use crate::display::DisplayState;

use super::error::RenderResult;
use super::frame::Frame;
use super::{json, kinetic, minimal, RenderOptions, Skin};

/// A rendering surface bound to an output stream
///
/// [`begin`](Self::begin) prepares the terminal and [`end`](Self::end)
/// restores it. Dropping an active surface restores it as well.
pub struct TerminalSurface<W: Write> {
    out: W,
    options: RenderOptions,
    active: bool,
    alternate: bool,
    last_height: usize,
    frames: u64,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self {
            out,
            options,
            active: false,
            alternate: false,
            last_height: 0,
            frames: 0,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Frames drawn so far
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// Prepare the output. Idempotent.
    pub fn begin(&mut self) -> RenderResult<()> {
        if self.active {
            return Ok(());
        }

        if self.options.alternate_screen && self.options.skin == Skin::Kinetic {
            queue!(self.out, EnterAlternateScreen, Hide)?;
            self.out.flush()?;
            self.alternate = true;
        }

        self.active = true;
        tracing::debug!(skin = %self.options.skin, alternate = self.alternate, "Surface ready");
        Ok(())
    }

    /// Draw the given state, replacing the previous frame
    pub fn draw(&mut self, state: &DisplayState) -> RenderResult<()> {
        match self.options.skin {
            Skin::Json => {
                let line = json::encode(state)?;
                writeln!(self.out, "{}", line)?;
            }
            Skin::Minimal => {
                let frame = minimal::render(state);
                if self.options.redraw {
                    queue!(self.out, Print('\r'), Clear(ClearType::CurrentLine))?;
                    self.write_frame(&frame, false)?;
                } else {
                    self.write_frame(&frame, true)?;
                }
            }
            Skin::Kinetic => {
                if self.alternate {
                    queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
                } else if self.options.redraw && self.last_height > 0 {
                    let up = u16::try_from(self.last_height).unwrap_or(u16::MAX);
                    queue!(self.out, MoveToPreviousLine(up), Clear(ClearType::FromCursorDown))?;
                }
                let frame = kinetic::render(state, &self.options);
                self.write_frame(&frame, true)?;
                self.last_height = frame.lines.len();
            }
        }

        self.out.flush()?;
        self.frames += 1;
        tracing::trace!(frame = self.frames, mounted = state.is_mounted(), "Frame drawn");
        Ok(())
    }

    /// Restore the output. Idempotent.
    pub fn end(&mut self) -> RenderResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        if self.alternate {
            queue!(self.out, Show, LeaveAlternateScreen)?;
            self.alternate = false;
        } else if self.options.skin == Skin::Minimal && self.options.redraw && self.frames > 0 {
            writeln!(self.out)?;
        }

        self.out.flush()?;
        tracing::debug!(frames = self.frames, "Surface closed");
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame, trailing_newline: bool) -> RenderResult<()> {
        let count = frame.lines.len();

        for (i, line) in frame.lines.iter().enumerate() {
            for span in &line.spans {
                if self.options.color {
                    let (r, g, b) = span.tone.rgb();
                    queue!(self.out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                    if span.bold {
                        queue!(self.out, SetAttribute(Attribute::Bold))?;
                    }
                    queue!(
                        self.out,
                        Print(&span.text),
                        SetAttribute(Attribute::Reset),
                        ResetColor
                    )?;
                } else {
                    queue!(self.out, Print(&span.text))?;
                }
            }

            if trailing_newline || i + 1 < count {
                queue!(self.out, Print('\n'))?;
            }
        }

        Ok(())
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        if let Err(e) = self.end() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}
