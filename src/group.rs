use std::fmt::{self, Debug, Display, Formatter};

use indexmap::map::Entry;
use indexmap::IndexMap;
use itertools::Itertools;
use tracing::trace;

use crate::average::AverageTracker;
use crate::prelude::*;

/// Single observation fed into a [`TrackerGroup`].
#[derive(Clone, Copy, Debug)]
pub enum Observation {
    /// Plain value, weight 1.
    Scalar(f64),

    /// Value carrying an explicit weight.
    Weighted { value: f64, weight: f64 },
}

impl From<f64> for Observation {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<(f64, f64)> for Observation {
    fn from((value, weight): (f64, f64)) -> Self {
        Self::Weighted { value, weight }
    }
}

/// Named collection of [`AverageTracker`]s, one per distinct metric name.
///
/// Trackers are created lazily on first update and iterated in the order
/// their names first appeared.
#[derive(Default)]
pub struct TrackerGroup {
    storage: IndexMap<String, AverageTracker>,
}

impl TrackerGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the observations in their given order.
    ///
    /// A name seen for the first time gets a fresh zeroed tracker before
    /// its observation is applied.
    pub fn update<N, O, I>(&mut self, data: I)
    where
        N: Into<String>,
        O: Into<Observation>,
        I: IntoIterator<Item = (N, O)>,
    {
        for (name, observation) in data {
            let tracker = match self.storage.entry(name.into()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    trace!(name = entry.key().as_str(), "new tracker");
                    let tracker = AverageTracker::new(entry.key().clone());
                    entry.insert(tracker)
                }
            };
            match observation.into() {
                Observation::Scalar(value) => tracker.update(value),
                Observation::Weighted { value, weight } => {
                    tracker.update_weighted(value, weight);
                }
            }
        }
    }

    /// Current average of the named tracker.
    ///
    /// Fails on an unknown name, a read never creates an entry.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.storage
            .get(name)
            .map(AverageTracker::item)
            .ok_or_else(|| anyhow!("no tracker named `{}`", name))
    }

    /// Yields `(name, current average)` pairs in first-insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.storage
            .iter()
            .map(|(name, tracker)| (name.as_str(), tracker.item()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Forgets all trackers.
    pub fn reset(&mut self) {
        trace!(n_trackers = self.storage.len(), "reset");
        self.storage.clear();
    }
}

impl Display for TrackerGroup {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.storage.values().format(" "))
    }
}

impl Debug for TrackerGroup {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "Metric Group: {}", self)
    }
}
