//! chart_window: the sample history behind bar, line, dot and gauge charts.
//!
//! A [`SlidingSampleWindow`] keeps the most recent `capacity` samples, tracks
//! or pins their value range, and hands renderers both the raw history and a
//! `[0, 1]` projection of it. Views subscribe to its change signal to redraw.

pub mod data_types;
pub mod notify;

pub use data_types::{
    SampleSource, SharedSampleWindow, SlidingSampleWindow, ValueRange, WindowConfig,
};
pub use notify::{ChangeNotifier, SubscriptionId};
