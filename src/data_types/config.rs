use eyre::{Result, WrapErr, bail, ensure};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::range::ValueRange;

pub const DEFAULT_CAPACITY: usize = 50;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn zero<T: Float>() -> T {
    T::zero()
}

/// Construction parameters for a [`SlidingSampleWindow`](super::SlidingSampleWindow).
///
/// Chart views receive this explicitly instead of reading a shared default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de> + Float"))]
pub struct WindowConfig<T = f64> {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Pins normalization when present; auto-range otherwise.
    #[serde(default)]
    pub range: Option<ValueRange<T>>,
    #[serde(default = "zero")]
    pub zero_reference: T,
}

impl<T: Float> Default for WindowConfig<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            range: None,
            zero_reference: T::zero(),
        }
    }
}

impl<T: Float> WindowConfig<T> {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_range(mut self, lower: T, upper: T) -> Self {
        self.range = Some(ValueRange::new(lower, upper));
        self
    }

    pub fn with_zero_reference(mut self, zero_reference: T) -> Self {
        self.zero_reference = zero_reference;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.capacity > 0, "window capacity must be positive");
        ensure!(
            self.zero_reference.is_finite(),
            "zero reference must be finite"
        );
        if let Some(range) = &self.range {
            if !range.lower().is_finite() || !range.upper().is_finite() {
                bail!("pinned range bounds must be finite");
            }
            // Deserialized ranges skip the ordering done by ValueRange::new.
            ensure!(
                range.lower() <= range.upper(),
                "pinned range lower bound exceeds upper bound"
            );
        }
        Ok(())
    }
}

impl<T> WindowConfig<T>
where
    T: Float + for<'de> Deserialize<'de>,
{
    /// Parses and validates a JSON window description, e.g.
    /// `{"capacity": 30, "range": {"lower": 0.0, "upper": 100.0}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse window config")?;
        config.validate().wrap_err("invalid window config")?;
        Ok(config)
    }
}
