//! Arc-length parametrized cubic Bézier curves.
//!
//! A `Curve` is a chain of cubic segments flattened into a cumulative
//! arc-length table, so `point_at(t)` moves at uniform speed in scene
//! units for uniform steps of `t` — Bézier parameter speed alone is not
//! uniform and would make trains visibly accelerate through bends.

use glam::DVec2;

use railpulse_core::types::wrap_unit;

/// Samples taken per segment when building the arc-length table.
const SAMPLES_PER_SEGMENT: usize = 64;

/// One cubic Bézier segment.
#[derive(Debug, Clone, Copy)]
pub struct CubicSegment {
    pub p0: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
    pub p3: DVec2,
}

impl CubicSegment {
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluate at Bézier parameter `u ∈ [0, 1]`.
    pub fn point(&self, u: f64) -> DVec2 {
        let v = 1.0 - u;
        self.p0 * (v * v * v)
            + self.p1 * (3.0 * v * v * u)
            + self.p2 * (3.0 * v * u * u)
            + self.p3 * (u * u * u)
    }
}

/// A chain of cubic segments with a precomputed arc-length table.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Sampled points along the whole chain.
    samples: Vec<DVec2>,
    /// Cumulative arc length up to each sample. Same length as `samples`.
    cumulative: Vec<f64>,
    /// Total arc length; never zero (defaults to 1.0 for degenerate input).
    length: f64,
}

impl Curve {
    /// Flatten a segment chain into an arc-length lookup table.
    pub fn new(segments: &[CubicSegment]) -> Self {
        let mut samples = Vec::with_capacity(segments.len() * SAMPLES_PER_SEGMENT + 1);
        let mut cumulative = Vec::with_capacity(segments.len() * SAMPLES_PER_SEGMENT + 1);

        let mut total = 0.0;
        let mut last: Option<DVec2> = None;
        for segment in segments {
            for i in 0..=SAMPLES_PER_SEGMENT {
                let u = i as f64 / SAMPLES_PER_SEGMENT as f64;
                let p = segment.point(u);
                // Segment joints coincide; skip the duplicate sample.
                if let Some(prev) = last {
                    let step = prev.distance(p);
                    if i == 0 && step < f64::EPSILON {
                        continue;
                    }
                    total += step;
                }
                samples.push(p);
                cumulative.push(total);
                last = Some(p);
            }
        }

        if samples.is_empty() {
            samples.push(DVec2::ZERO);
            cumulative.push(0.0);
        }

        Self {
            samples,
            cumulative,
            length: if total > f64::EPSILON { total } else { 1.0 },
        }
    }

    /// Total arc length in scene units. Guaranteed non-zero.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Position at fractional offset `t`; `t` is wrapped into `[0, 1)`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        self.point_at_len(wrap_unit(t) * self.length)
    }

    /// Position at arc length `s` from the start, clamped to the curve.
    pub fn point_at_len(&self, s: f64) -> DVec2 {
        let n = self.samples.len();
        if n == 1 {
            return self.samples[0];
        }
        let s = s.clamp(0.0, *self.cumulative.last().unwrap_or(&0.0));

        // Binary search for the bracketing samples, then lerp.
        let idx = match self
            .cumulative
            .binary_search_by(|len| len.partial_cmp(&s).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => return self.samples[i],
            Err(i) => i,
        };
        let hi = idx.clamp(1, n - 1);
        let lo = hi - 1;

        let span = self.cumulative[hi] - self.cumulative[lo];
        if span < f64::EPSILON {
            return self.samples[lo];
        }
        let frac = (s - self.cumulative[lo]) / span;
        self.samples[lo].lerp(self.samples[hi], frac)
    }

    /// Evenly spaced polyline along the curve, for rendering.
    pub fn polyline(&self, points: usize) -> Vec<DVec2> {
        let points = points.max(2);
        (0..points)
            .map(|i| self.point_at_len(i as f64 / (points - 1) as f64 * self.length))
            .collect()
    }
}
