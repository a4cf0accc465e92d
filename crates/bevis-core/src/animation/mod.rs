//! Animation system for the Kontroll pulse
//!
//! The sequencer owns the timeline; easing and ramps turn its progress
//! scalars into colors at the presentation boundary.

pub mod easing;
pub mod ramp;
pub mod sequencer;

pub use ramp::ColorRamp;
pub use sequencer::{KontrollSequencer, TrackProgress};
