use rand::Rng;

/// Source of the uniform offsets that spread sample points around their centers.
///
/// Every [`rand::Rng`] is a jitter source, so callers pass `rand::rng()` for
/// live data or a seeded `StdRng` when they need repeatable output.
pub trait JitterSource {
    /// Draws from `U(-half_width, half_width)`.
    fn jitter(&mut self, half_width: f64) -> f64;
}

impl<R: Rng> JitterSource for R {
    fn jitter(&mut self, half_width: f64) -> f64 {
        (self.random::<f64>() - 0.5) * 2.0 * half_width
    }
}

/// Places every point exactly on its cluster center.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centered;

impl JitterSource for Centered {
    fn jitter(&mut self, _half_width: f64) -> f64 {
        0.0
    }
}
