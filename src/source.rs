use alloc::vec::Vec;

use crate::key::TrackerKey;
use crate::RevealTracker;

/// The mechanism that decides when tracked elements get scanned.
///
/// The tracker's correctness contract is identical under every source:
/// [`RevealTracker::scan`] tolerates zero, one, or many deliveries for the
/// same element. Pick a source at composition time based on what the host
/// platform gives you — a scroll/resize event stream ([`ScrollPoll`]) or a
/// native intersection-observation primitive ([`IntersectionEvents`]).
pub trait ObservationSource<K> {
    /// Delivers candidate elements to the tracker for a scan.
    ///
    /// Returns the number of newly revealed elements.
    fn deliver(&mut self, tracker: &mut RevealTracker<K>) -> usize;
}

/// Poll-driven observation: every delivery rescans all tracked elements
/// against the tracker's current viewport.
///
/// Deliveries are deliberately unthrottled; geometry checks are cheap and the
/// host event loop already paces scroll ticks. Wrap deliveries in your own
/// debouncer if your adapter tracks very large element sets.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollPoll;

impl ScrollPoll {
    pub fn new() -> Self {
        Self
    }
}

impl<K: TrackerKey> ObservationSource<K> for ScrollPoll {
    fn deliver(&mut self, tracker: &mut RevealTracker<K>) -> usize {
        tracker.scan()
    }
}

/// A single notification from a native intersection primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionEntry<K> {
    pub key: K,
    pub is_intersecting: bool,
}

/// Event-driven observation: the platform's intersection primitive pushes
/// entries here, and each delivery drains the queue.
///
/// Intersecting entries are revealed directly, without recomputing geometry
/// (the platform already decided). Non-intersecting entries are dropped:
/// leaving the viewport never unmarks an element. Entries for unknown keys
/// are skipped silently.
#[derive(Clone, Debug)]
pub struct IntersectionEvents<K> {
    queue: Vec<IntersectionEntry<K>>,
}

impl<K> Default for IntersectionEvents<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> IntersectionEvents<K> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, entry: IntersectionEntry<K>) {
        self.queue.push(entry);
    }

    pub fn push_many(&mut self, entries: impl IntoIterator<Item = IntersectionEntry<K>>) {
        self.queue.extend(entries);
    }

    /// Number of queued, undelivered entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<K: TrackerKey> ObservationSource<K> for IntersectionEvents<K> {
    fn deliver(&mut self, tracker: &mut RevealTracker<K>) -> usize {
        if self.queue.is_empty() {
            return 0;
        }
        let mut revealed = 0;
        tracker.batch_update(|t| {
            for entry in self.queue.drain(..) {
                if entry.is_intersecting && t.reveal(&entry.key) {
                    revealed += 1;
                }
            }
        });
        revealed
    }
}
