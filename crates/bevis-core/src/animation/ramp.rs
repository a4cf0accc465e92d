//! Multi-stop color ramps
//!
//! Maps a progress scalar in [0, 1] onto a fixed control-point table of
//! sRGB stops. Segments are evenly spaced and blended linearly per
//! channel; any easing of the progress value happens before sampling.

use palette::{Mix, Srgb};

/// A fixed table of evenly spaced color stops sampled by progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<Srgb<u8>>,
}

impl ColorRamp {
    /// Build a ramp from at least two stops.
    pub fn new(stops: Vec<Srgb<u8>>) -> Self {
        debug_assert!(stops.len() >= 2, "a ramp needs at least two stops");
        Self { stops }
    }

    /// Two-stop ramp: a single linear segment.
    pub fn between(start: Srgb<u8>, end: Srgb<u8>) -> Self {
        Self::new(vec![start, end])
    }

    /// Three-stop ramp: two linear segments through a midpoint.
    pub fn through(start: Srgb<u8>, mid: Srgb<u8>, end: Srgb<u8>) -> Self {
        Self::new(vec![start, mid, end])
    }

    /// Sample the ramp at `progress` in [0, 1] (clamped).
    pub fn sample(&self, progress: f32) -> Srgb<u8> {
        let progress = progress.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        let scaled = progress * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f32;

        let start: Srgb<f32> = self.stops[index].into_format();
        let end: Srgb<f32> = self.stops[index + 1].into_format();
        start.mix(end, local).into_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black() -> Srgb<u8> {
        Srgb::new(0, 0, 0)
    }

    fn white() -> Srgb<u8> {
        Srgb::new(255, 255, 255)
    }

    #[test]
    fn test_endpoints_return_exact_stops() {
        let ramp = ColorRamp::between(Srgb::new(198, 245, 223), Srgb::new(107, 78, 255));
        assert_eq!(ramp.sample(0.0), Srgb::new(198, 245, 223));
        assert_eq!(ramp.sample(1.0), Srgb::new(107, 78, 255));
    }

    #[test]
    fn test_midpoint_of_three_stop_ramp_is_mid_stop() {
        let mid = Srgb::new(10, 200, 30);
        let ramp = ColorRamp::through(black(), mid, white());
        assert_eq!(ramp.sample(0.5), mid);
    }

    #[test]
    fn test_single_segment_blend_is_linear() {
        let ramp = ColorRamp::between(black(), white());
        let half = ramp.sample(0.5);
        // Component-wise lerp lands in the middle, allow rounding slack
        assert!((half.red as i16 - 128).abs() <= 1);
        assert!((half.green as i16 - 128).abs() <= 1);
        assert!((half.blue as i16 - 128).abs() <= 1);
    }

    #[test]
    fn test_progress_is_clamped() {
        let ramp = ColorRamp::between(black(), white());
        assert_eq!(ramp.sample(-1.0), black());
        assert_eq!(ramp.sample(2.0), white());
    }

    #[test]
    fn test_segments_blend_independently() {
        let ramp = ColorRamp::through(black(), white(), black());
        // Quarter progress is halfway through the first segment
        let quarter = ramp.sample(0.25);
        assert!((quarter.red as i16 - 128).abs() <= 1);
        // Three quarters is halfway back down the second segment
        let three_quarters = ramp.sample(0.75);
        assert!((three_quarters.red as i16 - 128).abs() <= 1);
    }
}
