use std::collections::VecDeque;
use std::sync::Arc;

use num_traits::Float;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::config::WindowConfig;
use super::range::ValueRange;
use crate::notify::{ChangeNotifier, SubscriptionId};

/// Read-only view of a sample window, as consumed by chart renderers.
pub trait SampleSource<T: Float = f64> {
    /// Raw samples, oldest first. Always `capacity()` long.
    fn raw_samples(&self) -> Vec<T>;

    /// Raw samples projected into `[0, 1]` against the active range.
    fn normalized_samples(&self) -> Vec<T>;

    fn capacity(&self) -> usize;

    /// How many trailing samples are real data rather than fill.
    fn sample_count(&self) -> usize;

    fn zero_reference(&self) -> T;

    /// Baseline position in `[0, 1]`, projected like a sample.
    fn normalized_zero_reference(&self) -> T;

    fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }
}

/// Window guarded by a caller-side lock, for feeds that push from another thread.
pub type SharedSampleWindow<T = f64> = Arc<Mutex<SlidingSampleWindow<T>>>;

/// Fixed-capacity history of samples with auto or pinned range normalization.
///
/// The buffer is always fully populated: slots that never received data hold
/// the fill value, which is `T::zero()`. Every mutating call fires the change
/// signal once, after the mutation.
#[derive(Debug)]
pub struct SlidingSampleWindow<T = f64> {
    samples: VecDeque<T>,
    capacity: usize,
    sample_count: usize,
    range: Option<ValueRange<T>>,
    zero_reference: T,
    notifier: ChangeNotifier,
}

impl<T: Float> SlidingSampleWindow<T> {
    pub fn new(capacity: usize, range: Option<ValueRange<T>>, zero_reference: T) -> Self {
        // Ranges built through serde skip ValueRange::new, so reorder here.
        let range = range.map(|r| ValueRange::new(r.lower(), r.upper()));
        debug!(capacity, pinned = range.is_some(), "sample window created");
        Self {
            samples: std::iter::repeat(T::zero()).take(capacity).collect(),
            capacity,
            sample_count: 0,
            range,
            zero_reference,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Auto-range window with a zero baseline.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, None, T::zero())
    }

    pub fn with_config(config: &WindowConfig<T>) -> Self {
        Self::new(config.capacity, config.range, config.zero_reference)
    }

    pub fn into_shared(self) -> SharedSampleWindow<T> {
        Arc::new(Mutex::new(self))
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn changed(&mut self) {
        trace!(
            capacity = self.capacity,
            sample_count = self.sample_count,
            "sample window changed"
        );
        self.notifier.notify();
    }

    /// Shifts the window by one. Returns `false` without touching anything
    /// when the window has no capacity.
    pub fn push(&mut self, value: T) -> bool {
        if self.capacity == 0 {
            warn!("push ignored on zero-capacity sample window");
            return false;
        }
        self.samples.pop_front();
        self.samples.push_back(value);
        self.sample_count = (self.sample_count + 1).min(self.capacity);
        self.changed();
        true
    }

    /// Same result as pushing each value in order, with a single change signal.
    ///
    /// Values older than the last `capacity` entries would be evicted before
    /// the batch ends, so they are never written.
    pub fn push_batch(&mut self, values: &[T]) -> bool {
        if self.capacity == 0 {
            warn!(len = values.len(), "batch ignored on zero-capacity sample window");
            return false;
        }
        if values.is_empty() {
            return false;
        }

        let skip = values.len().saturating_sub(self.capacity);
        for &v in &values[skip..] {
            self.samples.pop_front();
            self.samples.push_back(v);
        }
        self.sample_count = self
            .sample_count
            .saturating_add(values.len())
            .min(self.capacity);
        self.changed();
        true
    }

    /// Replaces the whole history. Capacity follows `values.len()`.
    pub fn set(&mut self, values: &[T]) {
        if values.len() != self.capacity {
            debug!(from = self.capacity, to = values.len(), "capacity set by replacement");
        }
        self.samples = values.iter().copied().collect();
        self.capacity = values.len();
        self.sample_count = values.len();
        self.changed();
    }

    /// Refills every slot with the fill value. A pinned range is kept.
    pub fn reset(&mut self) {
        debug!(capacity = self.capacity, "sample window reset");
        self.samples.iter_mut().for_each(|s| *s = T::zero());
        self.sample_count = 0;
        self.changed();
    }

    /// Growing pads the oldest end with fill; shrinking drops the oldest
    /// samples. The newest samples always stay at the end.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity {
            return;
        }
        debug!(from = self.capacity, to = new_capacity, "sample window resized");

        if new_capacity > self.capacity {
            for _ in self.capacity..new_capacity {
                self.samples.push_front(T::zero());
            }
        } else {
            self.samples.drain(..self.capacity - new_capacity);
        }
        self.capacity = new_capacity;
        self.sample_count = self.sample_count.min(new_capacity);
        self.changed();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    pub fn zero_reference(&self) -> T {
        self.zero_reference
    }

    pub fn fill_value(&self) -> T {
        T::zero()
    }

    pub fn pinned_range(&self) -> Option<ValueRange<T>> {
        self.range
    }

    pub fn is_pinned(&self) -> bool {
        self.range.is_some()
    }

    /// The pinned range, or min/max over the current contents (fill included).
    pub fn effective_range(&self) -> Option<ValueRange<T>> {
        self.range.or_else(|| ValueRange::of(self.samples.iter().copied()))
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.iter().copied()
    }

    pub fn raw_samples(&self) -> Vec<T> {
        self.samples.iter().copied().collect()
    }

    /// Trailing `sample_count` samples: the part of the window holding pushed data.
    pub fn filled_samples(&self) -> Vec<T> {
        self.samples
            .iter()
            .skip(self.capacity - self.sample_count)
            .copied()
            .collect()
    }

    pub fn latest(&self) -> Option<T> {
        if self.sample_count == 0 {
            None
        } else {
            self.samples.back().copied()
        }
    }

    fn normalize_with(&self, range: Option<ValueRange<T>>, value: T) -> T {
        match range {
            None => T::zero(),
            Some(r) if r.is_degenerate() => {
                if self.sample_count == 0 {
                    T::zero()
                } else {
                    T::one() / (T::one() + T::one())
                }
            }
            Some(r) => r.project(value),
        }
    }

    /// Recomputed on every call; nothing is cached between mutations.
    ///
    /// A degenerate range maps everything to 0.5, or to 0 while the window
    /// still holds only fill.
    pub fn normalized_samples(&self) -> Vec<T> {
        let range = self.effective_range();
        self.samples
            .iter()
            .map(|&s| self.normalize_with(range, s))
            .collect()
    }

    pub fn normalized_zero_reference(&self) -> T {
        self.normalize_with(self.effective_range(), self.zero_reference)
    }
}

impl<T: Float> SampleSource<T> for SlidingSampleWindow<T> {
    fn raw_samples(&self) -> Vec<T> {
        SlidingSampleWindow::raw_samples(self)
    }

    fn normalized_samples(&self) -> Vec<T> {
        SlidingSampleWindow::normalized_samples(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn sample_count(&self) -> usize {
        self.sample_count
    }

    fn zero_reference(&self) -> T {
        self.zero_reference
    }

    fn normalized_zero_reference(&self) -> T {
        SlidingSampleWindow::normalized_zero_reference(self)
    }
}
