/// A range of ray distances or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Same interval with a new upper bound.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.01, 1e9);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.01));
        assert!(!interval.surrounds(1e9));
        assert!(interval.surrounds(0.011));
        assert!(!interval.surrounds(0.0));
    }

    #[test]
    fn test_interval_with_max() {
        let shrunk = Interval::new(0.01, 1e9).with_max(4.0);
        assert_eq!(shrunk, Interval::new(0.01, 4.0));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 255.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(128.5), 128.5);
        assert_eq!(interval.clamp(300.0), 255.0);
        // NaN is passed through, the caller decides what it narrows to.
        assert!(interval.clamp(f64::NAN).is_nan());
    }
}
