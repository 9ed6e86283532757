use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Closed value interval `[lower, upper]` used to project samples into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange<T = f64> {
    lower: T,
    upper: T,
}

impl<T: Float> ValueRange<T> {
    /// Bounds are ordered, so `new(10.0, -10.0)` is the same range as `new(-10.0, 10.0)`.
    pub fn new(a: T, b: T) -> Self {
        if b < a {
            Self { lower: b, upper: a }
        } else {
            Self { lower: a, upper: b }
        }
    }

    /// Min/max over a sequence. NaN values are skipped; `None` when nothing remains.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut lower = T::infinity();
        let mut upper = T::neg_infinity();
        let mut found = false;

        for v in values {
            if v.is_nan() {
                continue;
            }
            lower = lower.min(v);
            upper = upper.max(v);
            found = true;
        }

        if found {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn span(&self) -> T {
        self.upper - self.lower
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn is_degenerate(&self) -> bool {
        self.upper == self.lower
    }

    /// Maps `value` onto `[0, 1]`, clamping values outside the range.
    /// A degenerate range has no slope; callers pick the constant for that case.
    pub fn project(&self, value: T) -> T {
        let t = (value - self.lower) / self.span();
        // Float::max returns the non-NaN operand, so NaN lands on 0.
        t.max(T::zero()).min(T::one())
    }
}
