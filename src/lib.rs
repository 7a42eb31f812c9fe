//! Running-average metric trackers for training and evaluation loops.

mod average;
mod group;
mod prelude;

pub use self::average::AverageTracker;
pub use self::group::{Observation, TrackerGroup};
pub use self::prelude::Result;
