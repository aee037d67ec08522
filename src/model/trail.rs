use nalgebra::{Point3, Vector3};

use super::params::TrailParams;
use crate::math::geometry::{midpoint, ribbon_normal};
use crate::math::ring_buffer::RingBuffer;

/// One rung of a trail ribbon: two points straddling the sampled position,
/// perpendicular to the local direction of travel. Consecutive rungs form a
/// triangle strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub p0: Point3<f64>,
    pub p1: Point3<f64>,
}

impl TrailSegment {
    fn centered(center: Point3<f64>, axis: Vector3<f64>, width: f64) -> Self {
        let half = axis * (width / 2.0);
        TrailSegment {
            p0: center + half,
            p1: center - half,
        }
    }

    /// The sampled position this segment was built around.
    pub fn center(&self) -> Point3<f64> {
        midpoint(&self.p0, &self.p1)
    }

    pub fn width(&self) -> f64 {
        (self.p0 - self.p1).norm()
    }
}

/// The recent path of a body in render space, with bounded memory.
///
/// Samples closer than two trail-widths to the previous one are dropped, and
/// once `capacity` segments are stored the oldest is evicted for each new one.
#[derive(Debug, Clone)]
pub struct Trail {
    segments: RingBuffer<TrailSegment>,
    line_width_divisor: f64,
    up: Vector3<f64>,
}

impl Trail {
    pub fn new(params: &TrailParams) -> Self {
        Trail {
            segments: RingBuffer::new(params.capacity),
            line_width_divisor: params.line_width_divisor,
            up: params.up,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.segments.capacity()
    }

    pub fn start(&self) -> usize {
        self.segments.start()
    }

    /// Ribbon width for a camera at the given distance. Scaling with distance
    /// keeps the trail roughly the same size on screen at every zoom.
    pub fn width_at(&self, camera_distance: f64) -> f64 {
        camera_distance / self.line_width_divisor
    }

    /// Samples `position` into the trail. Returns whether a segment was added.
    pub fn record(&mut self, position: Point3<f64>, camera_distance: f64) -> bool {
        let width = self.width_at(camera_distance);
        // A camera sitting on its target gives no usable width
        if !(width.is_finite() && width > 0.0) {
            log::debug!("Skipping trail sample with width {}", width);
            return false;
        }

        let previous = match self.segments.newest() {
            Some(seg) => *seg,
            None => {
                // Nothing to take a direction from yet, so the first rung is
                // laid along x.
                let seed = TrailSegment::centered(position, Vector3::x(), width);
                self.segments.push(seed);
                return true;
            }
        };

        // Sub-threshold movement leaves the trail untouched
        let last_point = previous.center();
        if (position - last_point).norm() <= 2.0 * width {
            return false;
        }

        let direction = position - last_point;
        let axis = ribbon_normal(&direction, &self.up);
        self.segments.push(TrailSegment::centered(position, axis, width));
        true
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Segments in the order they were recorded, oldest first.
    pub fn linearize(&self) -> impl DoubleEndedIterator<Item = &TrailSegment> + '_ {
        self.segments.iter()
    }

    pub fn newest(&self) -> Option<&TrailSegment> {
        self.segments.newest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_trail(capacity: usize) -> Trail {
        Trail::new(&TrailParams {
            capacity,
            ..TrailParams::default()
        })
    }

    // With the default divisor of 500, a camera 500 away gives width 1.
    const CAMERA_DIST: f64 = 500.0;

    #[test]
    fn test_first_sample_seeds_segment() {
        let mut trail = make_trail(10);
        assert!(trail.record(Point3::new(3.0, 0.0, 4.0), CAMERA_DIST));
        assert_eq!(trail.len(), 1);

        let seed = trail.newest().unwrap();
        approx::assert_relative_eq!(seed.p0, Point3::new(3.5, 0.0, 4.0));
        approx::assert_relative_eq!(seed.p1, Point3::new(2.5, 0.0, 4.0));
        approx::assert_relative_eq!(seed.center(), Point3::new(3.0, 0.0, 4.0));
        approx::assert_relative_eq!(seed.width(), 1.0);
    }

    #[test]
    fn test_decimation() {
        let mut trail = make_trail(10);
        trail.record(Point3::origin(), CAMERA_DIST);

        // Width is 1, so anything within 2 of the last sample is dropped
        assert!(!trail.record(Point3::new(1.9, 0.0, 0.0), CAMERA_DIST));
        assert!(!trail.record(Point3::new(0.0, 0.0, -2.0), CAMERA_DIST));
        assert_eq!(trail.len(), 1);

        assert!(trail.record(Point3::new(2.1, 0.0, 0.0), CAMERA_DIST));
        assert_eq!(trail.len(), 2);

        // Comparison is against the newest sample, not the first one
        assert!(!trail.record(Point3::new(3.0, 0.0, 0.0), CAMERA_DIST));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_ribbon_is_perpendicular_to_travel() {
        let mut trail = make_trail(10);
        trail.record(Point3::origin(), CAMERA_DIST);
        trail.record(Point3::new(0.0, 0.0, 10.0), CAMERA_DIST);

        // Travelling along +z with y up, the rung lies along x (z cross y = -x)
        let seg = trail.newest().unwrap();
        approx::assert_relative_eq!(seg.p0, Point3::new(-0.5, 0.0, 10.0));
        approx::assert_relative_eq!(seg.p1, Point3::new(0.5, 0.0, 10.0));
    }

    #[test]
    fn test_width_follows_camera_distance() {
        let mut trail = make_trail(10);
        trail.record(Point3::origin(), 1000.0);
        approx::assert_relative_eq!(trail.newest().unwrap().width(), 2.0);

        // At width 2, a move of 3 is too short
        assert!(!trail.record(Point3::new(3.0, 0.0, 0.0), 1000.0));
        // But from up close it's plenty
        assert!(trail.record(Point3::new(3.0, 0.0, 0.0), 50.0));
        approx::assert_relative_eq!(trail.newest().unwrap().width(), 0.1);
    }

    #[test]
    fn test_eviction_keeps_most_recent() {
        let capacity = 4;
        let mut trail = make_trail(capacity);

        let samples: Vec<_> = (0..10)
            .map(|i| Point3::new(10.0 * i as f64, 0.0, 0.0))
            .collect();
        for pt in samples.iter() {
            assert!(trail.record(*pt, CAMERA_DIST));
            assert!(trail.len() <= capacity);
        }

        assert_eq!(trail.len(), capacity);
        let centers: Vec<_> = trail.linearize().map(TrailSegment::center).collect();
        for (actual, expected) in centers.iter().zip(&samples[samples.len() - capacity..]) {
            approx::assert_relative_eq!(*actual, *expected);
        }
    }

    #[test]
    fn test_eviction_skips_dropped_samples() {
        let capacity = 3;
        let mut trail = make_trail(capacity);

        // Steps of 1.5 at width 1: every other sample is too close to keep
        let mut accepted = vec![];
        for i in 0..20 {
            let pt = Point3::new(1.5 * i as f64, 0.0, 0.0);
            if trail.record(pt, CAMERA_DIST) {
                accepted.push(pt);
            }
            assert!(trail.len() <= capacity);
        }
        assert_eq!(accepted.len(), 10);

        let centers: Vec<_> = trail.linearize().map(TrailSegment::center).collect();
        assert_eq!(centers.len(), capacity);
        for (actual, expected) in centers.iter().zip(&accepted[accepted.len() - capacity..]) {
            approx::assert_relative_eq!(*actual, *expected);
        }
        approx::assert_relative_eq!(centers[2], Point3::new(27.0, 0.0, 0.0));
    }

    #[test]
    fn test_unusable_width_is_skipped() {
        let mut trail = make_trail(4);
        assert!(!trail.record(Point3::origin(), f64::NAN));
        assert!(!trail.record(Point3::origin(), 0.0));
        assert!(trail.is_empty());

        trail.record(Point3::origin(), CAMERA_DIST);
        assert!(!trail.record(Point3::new(100.0, 0.0, 0.0), f64::NAN));
        assert!(!trail.record(Point3::new(100.0, 0.0, 0.0), f64::INFINITY));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut trail = make_trail(2);
        for i in 0..5 {
            trail.record(Point3::new(0.0, 0.0, 10.0 * i as f64), CAMERA_DIST);
        }
        assert_eq!(trail.start(), 1);

        trail.clear();
        assert!(trail.is_empty());
        assert_eq!(trail.start(), 0);
        assert_eq!(trail.linearize().count(), 0);

        // Next sample seeds again
        assert!(trail.record(Point3::new(0.1, 0.0, 0.0), CAMERA_DIST));
        assert_eq!(trail.len(), 1);
    }
}
