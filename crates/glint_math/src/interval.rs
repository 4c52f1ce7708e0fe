use crate::EPSILON;

/// A range of ray parameters or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// A universe interval (contains everything).
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    /// The closed unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Every parameter at or ahead of a ray origin.
    ///
    /// The lower bound sits just below zero so that `admits(0.0)` holds and a
    /// ray starting on a surface can still report that surface.
    pub const FORWARD: Interval = Interval {
        min: -EPSILON,
        max: f32::INFINITY,
    };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is within (min, max].
    ///
    /// This is the acceptance test for every hit: the lower bound is
    /// exclusive so a positive `min` keeps a ray from re-hitting the surface
    /// it just left.
    pub fn admits(&self, x: f32) -> bool {
        self.min < x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// An empty interval (or one with a NaN bound) has nothing to clamp to
    /// and returns x unchanged.
    pub fn clamp(&self, x: f32) -> f32 {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return x;
        }
        x.clamp(self.min, self.max)
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_creation() {
        let interval = Interval::new(0.0, 10.0);
        assert_eq!(interval.min, 0.0);
        assert_eq!(interval.max, 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_admits() {
        let interval = Interval::new(0.001, 10.0);

        // Lower bound excluded, upper bound included
        assert!(!interval.admits(0.001));
        assert!(!interval.admits(0.0));
        assert!(interval.admits(10.0));
        assert!(interval.admits(0.002));
        assert!(!interval.admits(10.1));
    }

    #[test]
    fn test_forward_admits_origin() {
        assert!(Interval::FORWARD.admits(0.0));
        assert!(Interval::FORWARD.admits(1e9));
        assert!(!Interval::FORWARD.admits(-0.5));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 0.999);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(0.5), 0.5);
        assert_eq!(interval.clamp(1.0), 0.999);
    }

    #[test]
    fn test_with_max() {
        let shrunk = Interval::new(0.001, f32::INFINITY).with_max(4.0);
        assert_eq!(shrunk, Interval::new(0.001, 4.0));
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        // Empty interval has min > max
        assert!(empty.min > empty.max);

        // Contains nothing
        assert!(!empty.contains(0.0));
        assert!(!empty.admits(f32::INFINITY));
    }

    #[test]
    fn test_clamp_on_empty_interval_is_identity() {
        assert_eq!(Interval::EMPTY.clamp(0.5), 0.5);
        assert_eq!(Interval::new(2.0, 1.0).clamp(-3.0), -3.0);
        assert_eq!(Interval::new(f32::NAN, 1.0).clamp(4.0), 4.0);
    }

    #[test]
    fn test_interval_universe() {
        let universe = Interval::UNIVERSE;

        assert!(universe.contains(0.0));
        assert!(universe.contains(1e10));
        assert!(universe.contains(-1e10));
    }
}
