use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::key::{ElementMap, TrackerKey};
use crate::types::is_intersecting;
use crate::{ElementRect, RevealKey, TrackerOptions, Viewport};

#[derive(Clone, Copy, Debug)]
struct Entry {
    rect: ElementRect,
    revealed: bool,
}

/// A headless viewport reveal tracker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; elements are tracked under caller keys.
/// - Your adapter drives it by providing element/viewport geometry and by
///   triggering [`scan`](Self::scan) from whatever event source it uses
///   (see [`crate::ObservationSource`]).
/// - The reveal marker is a one-way transition: once an element is revealed
///   it is never unmarked by this type, no matter how the viewport moves.
///
/// Elements that were unobserved (or never observed) are skipped silently
/// everywhere; an absent element simply never satisfies the intersection
/// predicate.
#[derive(Clone, Debug)]
pub struct RevealTracker<K = RevealKey> {
    options: TrackerOptions<K>,
    viewport: Viewport,
    elements: ElementMap<K, Entry>,
    revealed_len: usize,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: TrackerKey> RevealTracker<K> {
    /// Creates a new tracker from options.
    ///
    /// If `options.initial_viewport` is set, it is applied immediately.
    pub fn new(options: TrackerOptions<K>) -> Self {
        let viewport = options.initial_viewport.unwrap_or_default();
        rdebug!(
            enabled = options.enabled,
            min_visible_permille = options.min_visible_permille,
            "RevealTracker::new"
        );
        Self {
            viewport,
            elements: ElementMap::new(),
            revealed_len: 0,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &TrackerOptions<K> {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Markers are kept: disabling the tracker stops future reveals but never
    /// unmarks already-revealed elements.
    pub fn set_options(&mut self, options: TrackerOptions<K>) {
        self.options = options;
        rtrace!(
            enabled = self.options.enabled,
            min_visible_permille = self.options.min_visible_permille,
            "RevealTracker::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackerOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_reveal(
        &mut self,
        on_reveal: Option<impl Fn(&RevealTracker<K>, &K) + Send + Sync + 'static>,
    ) {
        self.options.on_reveal = on_reveal.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&RevealTracker<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when your adapter updates viewport geometry and triggers a
    /// scan in the same event tick and `on_change` drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.notify();
    }

    pub fn set_scroll_top(&mut self, top: i64) {
        if self.viewport.top == top {
            return;
        }
        self.viewport.top = top;
        self.notify();
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport.height == height {
            return;
        }
        self.viewport.height = height;
        self.notify();
    }

    /// Applies a scroll offset update from your UI layer and rescans.
    ///
    /// This is the coalesced entry point for scroll-poll adapters: one
    /// `on_change` at most, no matter how many elements reveal.
    ///
    /// Returns the number of newly revealed elements.
    pub fn apply_scroll_event(&mut self, top: i64) -> usize {
        rtrace!(top, "apply_scroll_event");
        let mut revealed = 0;
        self.batch_update(|t| {
            t.set_scroll_top(top);
            revealed = t.scan();
        });
        revealed
    }

    /// Applies a full viewport update (scroll + resize) and rescans.
    ///
    /// Returns the number of newly revealed elements.
    pub fn apply_viewport_event(&mut self, viewport: Viewport) -> usize {
        rtrace!(
            top = viewport.top,
            height = viewport.height,
            "apply_viewport_event"
        );
        let mut revealed = 0;
        self.batch_update(|t| {
            t.set_viewport(viewport);
            revealed = t.scan();
        });
        revealed
    }

    /// Starts (or refreshes) tracking of an element.
    ///
    /// Re-observing a known key updates its rect but never clears its
    /// revealed marker.
    pub fn observe(&mut self, key: K, rect: ElementRect) {
        self.elements
            .entry(key)
            .and_modify(|entry| entry.rect = rect)
            .or_insert(Entry {
                rect,
                revealed: false,
            });
        self.notify();
    }

    /// Registers one attach cycle's worth of discovered elements.
    pub fn observe_many(&mut self, elements: impl IntoIterator<Item = (K, ElementRect)>) {
        self.batch_update(|t| {
            for (key, rect) in elements {
                t.observe(key, rect);
            }
        });
    }

    /// Stops tracking an element. Unknown keys are a silent no-op.
    ///
    /// Returns whether the element was tracked.
    pub fn unobserve(&mut self, key: &K) -> bool {
        let Some(entry) = self.elements.remove(key) else {
            return false;
        };
        if entry.revealed {
            self.revealed_len -= 1;
        }
        self.notify();
        true
    }

    /// Updates an element's geometry after relayout. Unknown keys are a
    /// silent no-op.
    pub fn set_element_rect(&mut self, key: &K, rect: ElementRect) {
        let Some(entry) = self.elements.get_mut(key) else {
            return;
        };
        if entry.rect == rect {
            return;
        }
        entry.rect = rect;
        self.notify();
    }

    pub fn element_rect(&self, key: &K) -> Option<ElementRect> {
        self.elements.get(key).map(|e| e.rect)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.elements.get(key).is_some_and(|e| e.revealed)
    }

    /// Number of tracked elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_len
    }

    pub fn pending_count(&self) -> usize {
        self.elements.len() - self.revealed_len
    }

    /// Whether every tracked element has been revealed.
    ///
    /// Vacuously true for an empty tracker; the tracker's job is done either
    /// way.
    pub fn all_revealed(&self) -> bool {
        self.revealed_len == self.elements.len()
    }

    /// Iterates over revealed element keys without allocations.
    pub fn for_each_revealed(&self, mut f: impl FnMut(&K)) {
        for (key, entry) in self.elements.iter() {
            if entry.revealed {
                f(key);
            }
        }
    }

    /// Iterates over not-yet-revealed elements without allocations.
    pub fn for_each_pending(&self, mut f: impl FnMut(&K, ElementRect)) {
        for (key, entry) in self.elements.iter() {
            if !entry.revealed {
                f(key, entry.rect);
            }
        }
    }

    /// Exports the revealed keys as a `Vec` (useful for persistence).
    pub fn export_revealed(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.revealed_len);
        self.for_each_revealed(|k| out.push(k.clone()));
        out
    }

    /// Restores revealed markers from a previous session.
    ///
    /// Only currently tracked keys are affected; unknown keys are skipped
    /// silently. This does not fire `on_reveal` (the markers were already
    /// applied when the elements originally revealed).
    pub fn import_revealed(&mut self, keys: impl IntoIterator<Item = K>) {
        let mut n = 0usize;
        for key in keys {
            let Some(entry) = self.elements.get_mut(&key) else {
                continue;
            };
            if !entry.revealed {
                entry.revealed = true;
                self.revealed_len += 1;
                n += 1;
            }
        }
        rdebug!(restored = n, "import_revealed");
        if n > 0 {
            self.notify();
        }
    }

    /// Drops all tracked elements (end of an attach cycle).
    pub fn clear(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.elements.clear();
        self.revealed_len = 0;
        self.notify();
    }

    /// Idempotently marks an element as revealed.
    ///
    /// Returns `true` iff the element transitioned (tracked, not yet
    /// revealed, tracker enabled). Calling twice has the same observable
    /// effect as calling once.
    pub fn reveal(&mut self, key: &K) -> bool {
        if !self.options.enabled {
            return false;
        }
        let Some(entry) = self.elements.get_mut(key) else {
            return false;
        };
        if entry.revealed {
            return false;
        }
        entry.revealed = true;
        self.revealed_len += 1;
        rtrace!(revealed = self.revealed_len, "reveal");
        self.fire_reveal(key);
        self.notify();
        true
    }

    fn fire_reveal(&self, key: &K) {
        if let Some(cb) = &self.options.on_reveal {
            cb(self, key);
        }
    }

    /// Tests every pending element against the current viewport and reveals
    /// the ones that intersect.
    ///
    /// Safe to call arbitrarily often; repeat invocations on unchanged
    /// geometry are no-ops. Returns the number of newly revealed elements.
    pub fn scan(&mut self) -> usize {
        self.scan_for(self.viewport)
    }

    /// Same as [`scan`](Self::scan), but against an explicit viewport.
    ///
    /// The stored viewport is left untouched; reveal markers are applied as
    /// usual.
    pub fn scan_for(&mut self, viewport: Viewport) -> usize {
        if !self.options.enabled {
            return 0;
        }

        let vp = viewport.expanded(self.options.margin);
        let permille = self.options.min_visible_permille.min(1000) as u64;

        let mut hits: Vec<K> = Vec::new();
        for (key, entry) in self.elements.iter() {
            if entry.revealed {
                continue;
            }
            if !is_intersecting(entry.rect, vp) {
                continue;
            }
            if permille > 0 {
                let height = entry.rect.height();
                let visible = entry.rect.visible_within(vp);
                if height > 0 && visible.saturating_mul(1000) < permille.saturating_mul(height) {
                    continue;
                }
            }
            hits.push(key.clone());
        }

        if hits.is_empty() {
            return 0;
        }

        rdebug!(newly_revealed = hits.len(), "scan");
        self.batch_update(|t| {
            for key in &hits {
                t.reveal(key);
            }
        });
        hits.len()
    }
}
