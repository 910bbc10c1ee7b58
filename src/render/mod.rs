//! Rendering surfaces
//!
//! Everything here reads [`DisplayState`](crate::display::DisplayState) and
//! never writes it.
//!
//! - **frame**: Styled text frames shared by the skins
//! - **kinetic**: The elaborate card skin
//! - **minimal**: The one-line skin
//! - **json**: JSON lines encoding
//! - **terminal**: Drawing frames to a terminal with crossterm
//! - **error**: Error types

pub mod error;
pub mod frame;
pub mod json;
pub mod kinetic;
pub mod minimal;
pub mod terminal;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::display::DisplayState;

pub use error::{RenderError, RenderResult};
pub use frame::{Frame, Line, Span, Tone};
pub use json::TickRecord;
pub use terminal::TerminalSurface;

/// How the display state is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    /// Full card with block digits, meter and footer
    #[default]
    Kinetic,
    /// Single line, redrawn in place
    Minimal,
    /// One JSON object per tick
    Json,
}

impl Skin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Kinetic => "kinetic",
            Skin::Minimal => "minimal",
            Skin::Json => "json",
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown skin name
#[derive(Debug, Clone, Error)]
#[error("Unknown skin '{0}' (expected kinetic, minimal or json)")]
pub struct ParseSkinError(pub String);

impl FromStr for Skin {
    type Err = ParseSkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kinetic" => Ok(Skin::Kinetic),
            "minimal" | "simple" => Ok(Skin::Minimal),
            "json" => Ok(Skin::Json),
            other => Err(ParseSkinError(other.to_string())),
        }
    }
}

/// Presentation settings for a surface
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub skin: Skin,
    /// Freeze blinking separators and the live pulse
    pub reduced_motion: bool,
    /// Emit ANSI colors
    pub color: bool,
    /// Draw the kinetic skin on the terminal's alternate screen
    pub alternate_screen: bool,
    /// Overwrite the previous frame with cursor movement. Off for pipes and
    /// files, where each frame is appended as plain lines.
    pub redraw: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            skin: Skin::Kinetic,
            reduced_motion: false,
            color: true,
            alternate_screen: false,
            redraw: true,
        }
    }
}

/// Build the styled frame for a state.
///
/// The JSON skin has no frame form; it falls back to the minimal line.
pub fn render_frame(state: &DisplayState, options: &RenderOptions) -> Frame {
    match options.skin {
        Skin::Kinetic => kinetic::render(state, options),
        Skin::Minimal | Skin::Json => minimal::render(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skin() {
        assert_eq!("kinetic".parse::<Skin>().unwrap(), Skin::Kinetic);
        assert_eq!(" Minimal ".parse::<Skin>().unwrap(), Skin::Minimal);
        assert_eq!("simple".parse::<Skin>().unwrap(), Skin::Minimal);
        assert_eq!("JSON".parse::<Skin>().unwrap(), Skin::Json);

        let err = "neon".parse::<Skin>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown skin 'neon' (expected kinetic, minimal or json)"
        );
    }

    #[test]
    fn test_skin_display_round_trips() {
        for skin in [Skin::Kinetic, Skin::Minimal, Skin::Json] {
            assert_eq!(skin.to_string().parse::<Skin>().unwrap(), skin);
        }
    }

    #[test]
    fn test_render_frame_dispatch() {
        let state = DisplayState::new();
        let minimal = RenderOptions {
            skin: Skin::Minimal,
            ..RenderOptions::default()
        };

        assert_eq!(render_frame(&state, &minimal).lines.len(), 1);
        assert!(render_frame(&state, &RenderOptions::default()).lines.len() > 10);
    }
}
