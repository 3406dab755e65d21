use crate::key::TrackerKey;
use crate::{ElementRect, RevealTracker, TrackerOptions};

/// An optional tooltip capability, injected at attach time.
///
/// Stands in for "initialize the third-party tooltip widget if one is
/// registered". The tracker never inspects it beyond calling `init` once.
pub trait TooltipProvider {
    fn init(&self);
}

/// Builds a tracker for one attach cycle.
///
/// `elements` are the `(key, rect)` pairs discovered from the container scope
/// (conceptually, everything matching a structural selector within one
/// subtree). If a tooltip capability is injected, it is initialized once.
///
/// There is no matching teardown: the tracker holds no timers or
/// subscriptions, so dropping it releases everything.
pub fn attach<K: TrackerKey>(
    elements: impl IntoIterator<Item = (K, ElementRect)>,
    options: TrackerOptions<K>,
    tooltips: Option<&dyn TooltipProvider>,
) -> RevealTracker<K> {
    let mut tracker = RevealTracker::new(options);
    tracker.observe_many(elements);
    if let Some(provider) = tooltips {
        provider.init();
    }
    tracker
}
