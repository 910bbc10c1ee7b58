//! Minimal skin: one line with the time, date and zone.

use crate::display::DisplayState;

use super::frame::{Frame, Line, Span, Tone};

pub fn render(state: &DisplayState) -> Frame {
    let snapshot = state.snapshot();

    let mut line = Line::new()
        .push(Span::new(snapshot.clock_face(':'), Tone::Ink).bold())
        .push(Span::new("  ", Tone::Ink))
        .push(Span::new(snapshot.date_line(), Tone::Muted));
    if !snapshot.time_zone().is_empty() {
        line = line
            .push(Span::new("  ", Tone::Ink))
            .push(Span::new(snapshot.time_zone(), Tone::Faint));
    }

    let mut frame = Frame::new();
    frame.push(line);
    frame
}
