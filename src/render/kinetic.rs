//! Kinetic skin
//!
//! The elaborate card: live badge, greeting, date and zone header, large
//! block digits, a seconds meter and a footer.

use crate::display::{blink_on, greeting, meter_fraction, DisplayState};

use super::frame::{Frame, Line, Span, Tone};
use super::RenderOptions;

/// Columns between the card's inner padding
pub const CARD_WIDTH: usize = 46;

const GLYPH_HEIGHT: usize = 5;

const HINT: &str = "Updates every second";
const CHIPS: [&str; 3] = ["Static Binary", "Any Terminal", "Kinetic UI"];
const FINEPRINT: &str = "Tip: park this in a spare terminal pane for a clean desk clock.";

/// Build the kinetic frame for a state
pub fn render(state: &DisplayState, options: &RenderOptions) -> Frame {
    let snapshot = state.snapshot();
    let bright = blink_on(state, options.reduced_motion);
    let mut frame = Frame::new();

    // Header
    let pulse = if bright { "●" } else { "○" };
    let mut badge = Line::new()
        .push(Span::new(format!(" {} ", pulse), Tone::AccentA))
        .push(Span::new("LIVE", Tone::Ink).bold())
        .push(Span::new("   ", Tone::Ink));
    if let Some(greeting) = greeting(state) {
        badge = badge.push(Span::new(greeting.as_str(), Tone::Ink).bold());
    }
    frame.push(badge);

    let mut date = Line::new()
        .push(Span::new(" ".repeat(10), Tone::Ink))
        .push(Span::new(snapshot.date_line(), Tone::Muted));
    if !snapshot.time_zone().is_empty() {
        date = date
            .push(Span::new(" · ", Tone::Faint))
            .push(Span::new(snapshot.time_zone(), Tone::Muted));
    }
    frame.push(date);
    frame.push(Line::new());

    // Card
    frame.push(border('╭', '╮'));
    frame.push(card_row(Line::new()));

    let separator_tone = if bright { Tone::Muted } else { Tone::Faint };
    let hours = big_text(snapshot.hours());
    let minutes = big_text(snapshot.minutes());
    let colon = glyph(':');
    for row in 0..GLYPH_HEIGHT {
        let seconds = if row == GLYPH_HEIGHT - 1 {
            snapshot.seconds().to_string()
        } else {
            " ".repeat(snapshot.seconds().chars().count())
        };
        let digits = Line::new()
            .push(Span::new(hours[row].clone(), Tone::Ink).bold())
            .push(Span::new(format!(" {} ", colon[row]), separator_tone))
            .push(Span::new(minutes[row].clone(), Tone::Ink).bold())
            .push(Span::new(format!(" {} ", colon[row]), separator_tone))
            .push(Span::new(seconds, Tone::Muted).bold());
        frame.push(card_row(center(digits, CARD_WIDTH)));
    }

    frame.push(card_row(Line::new()));
    frame.push(card_row(meter(meter_fraction(state), CARD_WIDTH)));
    frame.push(card_row(Line::new()));
    frame.push(card_row(Line::from(Span::new(HINT, Tone::Faint))));

    let chips = CHIPS
        .iter()
        .map(|chip| format!("({})", chip))
        .collect::<Vec<_>>()
        .join(" ");
    frame.push(card_row(right(
        Line::from(Span::new(chips, Tone::Muted)),
        CARD_WIDTH,
    )));
    frame.push(border('╰', '╯'));

    frame.push(Line::new());
    frame.push(Line::from(Span::new(format!(" {}", FINEPRINT), Tone::Faint)));

    frame
}

fn border(left: char, right: char) -> Line {
    let rule = "─".repeat(CARD_WIDTH + 2);
    Line::from(Span::new(format!(" {}{}{}", left, rule, right), Tone::Faint))
}

fn card_row(content: Line) -> Line {
    let mut row = Line::new().push(Span::new(" │ ", Tone::Faint));
    row.spans.extend(content.pad_to(CARD_WIDTH).spans);
    row.push(Span::new(" │", Tone::Faint))
}

fn center(content: Line, width: usize) -> Line {
    let left = width.saturating_sub(content.width()) / 2;
    let mut line = Line::new().push(Span::new(" ".repeat(left), Tone::Ink));
    line.spans.extend(content.spans);
    line
}

fn right(content: Line, width: usize) -> Line {
    let left = width.saturating_sub(content.width());
    let mut line = Line::new().push(Span::new(" ".repeat(left), Tone::Ink));
    line.spans.extend(content.spans);
    line
}

/// Seconds meter spanning `width` cells, shaded across the three accents
fn meter(fraction: f64, width: usize) -> Line {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut line = Line::new();

    for cell in 0..filled {
        let tone = match cell * 3 / width {
            0 => Tone::AccentA,
            1 => Tone::AccentB,
            _ => Tone::AccentC,
        };
        line.spans.push(Span::new("█", tone));
    }
    if filled < width {
        line.spans
            .push(Span::new("░".repeat(width - filled), Tone::Faint));
    }

    line
}

/// Render a short string as rows of block glyphs
fn big_text(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for (i, c) in text.chars().enumerate() {
        let g = glyph(c);
        for (row, out) in rows.iter_mut().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(g[row]);
        }
    }
    rows
}

fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        '-' => ["   ", "   ", "███", "   ", "   "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}
