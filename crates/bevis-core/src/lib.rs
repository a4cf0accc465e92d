//! Core library for bevis - the terminal student-ID card.
//!
//! Holds everything that is independent of the terminal frontend: the
//! Kontroll animation sequencer, the interpolation utilities it feeds,
//! the static profile data, configuration loading, and the one-shot
//! icon rasterizer.

pub mod animation;
pub mod config;
pub mod icons;
pub mod profile;

pub use animation::{ColorRamp, KontrollSequencer, TrackProgress};
pub use config::BevisConfig;
pub use profile::StaticProfile;
