/// A closed range `[min, max]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Creates an interval spanning `a` and `b`, in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Degenerate interval holding a single value.
    #[must_use]
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Returns whether `value` lies within the closed range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns whether the two closed ranges share at least one value.
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Common part of two ranges, or `None` when they are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min <= max).then_some(Interval { min, max })
    }

    /// Smallest range containing both.
    #[must_use]
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grows the range to include `value`.
    #[must_use]
    pub fn including(&self, value: f64) -> Interval {
        Interval {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Widens both ends by `margin`.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Interval {
        Interval::new(self.min - margin, self.max + margin)
    }
}
