//! Display state shared between the sampler and rendering surfaces.
//!
//! The sampler's tick callback is the only writer. Surfaces read the latest
//! state and redraw when it changes.

pub mod state;
pub mod view;

pub use state::{DisplayState, SharedDisplay};
pub use view::{blink_on, greeting, meter_fraction, Greeting};
