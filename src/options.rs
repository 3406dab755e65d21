use alloc::sync::Arc;

use crate::tracker::RevealTracker;
use crate::{RevealKey, RevealMargin, Viewport};

/// A callback fired once per element, at the moment it becomes revealed.
///
/// This is the output boundary: a UI adapter typically maps it to "add the
/// reveal class/attribute to this element". It is never fired twice for the
/// same key.
pub type OnRevealCallback<K> = Arc<dyn Fn(&RevealTracker<K>, &K) + Send + Sync>;

/// A callback fired when the tracker's state changes.
///
/// Updates are coalesced: a `scan` that reveals several elements fires this
/// once, after all markers are applied.
pub type OnChangeCallback<K> = Arc<dyn Fn(&RevealTracker<K>) + Send + Sync>;

/// Configuration for [`crate::RevealTracker`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct TrackerOptions<K = RevealKey> {
    /// Enables/disables the tracker. When disabled, scans reveal nothing.
    pub enabled: bool,

    /// Viewport margins applied before the intersection test.
    ///
    /// The default is zero. A negative `end` margin reproduces the common
    /// "don't reveal until the element clears the bottom edge" pattern.
    pub margin: RevealMargin,

    /// Minimum visible fraction of the element, in permille (0..=1000).
    ///
    /// `0` (the default) reveals on any strict overlap. `100` requires 10% of
    /// the element's height to be inside the (margin-adjusted) viewport.
    /// Zero-height elements reveal on any overlap regardless of this value.
    pub min_visible_permille: u16,

    /// The initial viewport geometry, applied by `RevealTracker::new`.
    pub initial_viewport: Option<Viewport>,

    /// Optional per-element reveal hook.
    pub on_reveal: Option<OnRevealCallback<K>>,

    /// Optional coalesced change notification.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> TrackerOptions<K> {
    pub fn new() -> Self {
        Self {
            enabled: true,
            margin: RevealMargin::default(),
            min_visible_permille: 0,
            initial_viewport: None,
            on_reveal: None,
            on_change: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_margin(mut self, margin: RevealMargin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_min_visible_permille(mut self, permille: u16) -> Self {
        self.min_visible_permille = permille;
        self
    }

    pub fn with_initial_viewport(mut self, viewport: Option<Viewport>) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn with_on_reveal(
        mut self,
        on_reveal: Option<impl Fn(&RevealTracker<K>, &K) + Send + Sync + 'static>,
    ) -> Self {
        self.on_reveal = on_reveal.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&RevealTracker<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for TrackerOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for TrackerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            margin: self.margin,
            min_visible_permille: self.min_visible_permille,
            initial_viewport: self.initial_viewport,
            on_reveal: self.on_reveal.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for TrackerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("enabled", &self.enabled)
            .field("margin", &self.margin)
            .field("min_visible_permille", &self.min_visible_permille)
            .field("initial_viewport", &self.initial_viewport)
            .finish_non_exhaustive()
    }
}
