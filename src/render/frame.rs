//! Styled text frames
//!
//! Skins build a [`Frame`] of styled spans. Surfaces decide how (and whether)
//! to turn tones into colors.

/// Palette entry for a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Primary text
    Ink,
    /// Secondary text
    Muted,
    /// Tertiary text, dimmed blink phase, empty meter cells
    Faint,
    /// Cyan accent (#66e3ff)
    AccentA,
    /// Magenta accent (#ff4fd8)
    AccentB,
    /// Amber accent (#ffd36e)
    AccentC,
}

impl Tone {
    /// RGB triple used by color-capable surfaces
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tone::Ink => (235, 235, 240),
            Tone::Muted => (174, 174, 182),
            Tone::Faint => (110, 110, 122),
            Tone::AccentA => (0x66, 0xe3, 0xff),
            Tone::AccentB => (0xff, 0x4f, 0xd8),
            Tone::AccentC => (0xff, 0xd3, 0x6e),
        }
    }
}

/// A run of text sharing one tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Width in terminal columns, counting one per char
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One row of a frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Pad with spaces up to `width` columns
    pub fn pad_to(mut self, width: usize) -> Self {
        let current = self.width();
        if current < width {
            self.spans
                .push(Span::new(" ".repeat(width - current), Tone::Ink));
        }
        self
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Line { spans: vec![span] }
    }
}

/// A full rendering of the display state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<Line>) {
        self.lines.push(line.into());
    }

    /// Unstyled text, one row per line
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
