//! Running min/max over sampled values.
//!
//! Used to stretch a buffer of noise samples onto `[0, 1]` after the fact,
//! e.g. before color-mapping a preview.

/// Spans narrower than this normalize to zero.
const EPSILON: f32 = 1e-6;

/// Observed value range. Empty until the first finite sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueRange {
    /// An empty range.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    /// Range of every non-NaN value in `samples`.
    #[must_use]
    pub fn from_samples(samples: impl IntoIterator<Item = f32>) -> Self {
        let mut range = Self::new();
        for v in samples {
            range.observe(v);
        }
        range
    }

    /// Widens the range to include `v`. NaN is ignored.
    #[inline]
    pub fn observe(&mut self, v: f32) {
        if v.is_nan() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// `true` until something has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Smallest observed value (`+inf` when empty).
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Largest observed value (`-inf` when empty).
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// `max - min`, or 0 when empty.
    #[must_use]
    pub fn span(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Maps `v` onto `[0, 1]` relative to the range.
    ///
    /// Returns 0 when the span is below `1e-6`.
    #[must_use]
    pub fn normalize(&self, v: f32) -> f32 {
        let span = self.span();
        if span < EPSILON {
            0.0
        } else {
            (v - self.min) / span
        }
    }
}
