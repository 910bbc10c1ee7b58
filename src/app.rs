//! Clock application lifecycle
//!
//! Activation creates the display state, starts the sampler writing into it
//! and drives a surface from it. Deactivation cancels the sampler before the
//! surface is torn down, so no tick lands on a closed surface.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use crate::clock::{SnapshotFormatter, TimeSampler, DEFAULT_TICK_PERIOD};
use crate::config::Config;
use crate::display::{DisplayState, SharedDisplay};
use crate::render::{RenderOptions, RenderResult, TerminalSurface};

/// Outcome of one activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames drawn, including the placeholder frame
    pub frames: u64,
    /// Sampler ticks delivered
    pub ticks: u64,
}

/// One clock component: a sampler, a display state and a surface
#[derive(Debug, Clone)]
pub struct ClockApp {
    formatter: SnapshotFormatter,
    period: Duration,
    options: RenderOptions,
    max_ticks: Option<u64>,
}

impl ClockApp {
    pub fn new(formatter: SnapshotFormatter, options: RenderOptions) -> Self {
        Self {
            formatter,
            period: DEFAULT_TICK_PERIOD,
            options,
            max_ticks: None,
        }
    }

    /// App reading the host clock with settings from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(SnapshotFormatter::system(), config.render_options())
            .with_period(config.tick_period())
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Draw the kinetic skin on the terminal's alternate screen
    pub fn with_alternate_screen(mut self, on: bool) -> Self {
        self.options.alternate_screen = on;
        self
    }

    /// Use the alternate screen and in-place redraw only on a real terminal
    pub fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.options.alternate_screen = is_terminal;
        self.options.redraw = is_terminal;
        self
    }

    /// Stop by itself after this many ticks
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Draw a single mounted frame and return
    pub fn render_once<W: Write>(&self, out: W) -> RenderResult<()> {
        let sampler = TimeSampler::new(self.formatter.clone(), self.period);
        let mut state = DisplayState::new();
        state.apply(sampler.sample_once());

        let mut surface = TerminalSurface::new(out, self.options.clone());
        surface.begin()?;
        surface.draw(&state)?;
        surface.end()
    }

    /// Run until `shutdown` resolves or the tick limit is reached
    pub async fn run<W, S>(&self, out: W, shutdown: S) -> RenderResult<RunSummary>
    where
        W: Write,
        S: Future<Output = ()>,
    {
        let display = SharedDisplay::new();
        let mut updates = display.subscribe();

        let mut surface = TerminalSurface::new(out, self.options.clone());
        surface.begin()?;

        // Placeholder frame until the first tick lands
        let initial = updates.borrow_and_update().clone();
        surface.draw(&initial)?;

        let sampler = TimeSampler::new(self.formatter.clone(), self.period);
        let writer = display.clone();
        let mut handle = sampler.start(move |snapshot| writer.publish(snapshot));

        tracing::info!(
            skin = %self.options.skin,
            period_ms = sampler.period().as_millis() as u64,
            "Clock activated"
        );

        tokio::pin!(shutdown);
        let mut ticks_drawn = 0u64;

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested");
                    break;
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = updates.borrow_and_update().clone();
                    surface.draw(&state)?;
                    ticks_drawn += 1;

                    if self.max_ticks.is_some_and(|max| ticks_drawn >= max) {
                        break;
                    }
                }
            }
        }

        handle.cancel();
        let summary = RunSummary {
            frames: surface.frames_drawn(),
            ticks: handle.tick_count(),
        };
        surface.end()?;

        tracing::info!(frames = summary.frames, ticks = summary.ticks, "Clock deactivated");
        Ok(summary)
    }
}
