/// Key type for trackers keyed by a plain element id.
pub type RevealKey = u64;

/// Vertical extent of a tracked element, in document coordinates.
///
/// Coordinates are signed so geometry stays well-defined for content laid out
/// above the document origin (and so intersection is invariant under
/// translation of both rectangles).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRect {
    pub top: i64,
    pub bottom: i64,
}

impl ElementRect {
    pub fn new(top: i64, bottom: i64) -> Self {
        Self { top, bottom }
    }

    /// Height of the rect; degenerate rects (bottom above top) report 0.
    pub fn height(&self) -> u64 {
        self.bottom.saturating_sub(self.top).max(0) as u64
    }

    /// Length of the part of this rect that lies inside `viewport`.
    pub fn visible_within(&self, viewport: Viewport) -> u64 {
        let top = self.top.max(viewport.top);
        let bottom = self.bottom.min(viewport.bottom());
        bottom.saturating_sub(top).max(0) as u64
    }
}

/// The currently visible window into a scrollable document.
///
/// `top` is the scroll offset; `bottom()` is `top + height`. The tracker only
/// ever reads this; your UI layer mutates it via the tracker's setters as the
/// user scrolls or resizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub top: i64,
    pub height: u32,
}

impl Viewport {
    pub fn new(top: i64, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> i64 {
        self.top.saturating_add(self.height as i64)
    }

    /// Returns this viewport grown (positive margins) or shrunk (negative
    /// margins) at each edge. A collapsed result has height 0.
    pub fn expanded(&self, margin: RevealMargin) -> Viewport {
        let top = self.top.saturating_sub(margin.start as i64);
        let bottom = self.bottom().saturating_add(margin.end as i64);
        let height = bottom.saturating_sub(top).clamp(0, u32::MAX as i64) as u32;
        Viewport { top, height }
    }
}

/// Margins applied to the viewport before the intersection test, one per edge
/// (aka `rootMargin` in DOM intersection observers).
///
/// Positive values grow the viewport (elements reveal early); negative values
/// shrink it (elements must scroll further in before revealing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealMargin {
    pub start: i32,
    pub end: i32,
}

impl RevealMargin {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn is_zero(&self) -> bool {
        self.start == 0 && self.end == 0
    }
}

/// Returns whether `rect` overlaps `viewport` on the vertical axis.
///
/// Strict interval overlap: touching edges do not count. Pure and total for
/// all finite inputs; shifting both arguments by the same offset never changes
/// the result.
pub fn is_intersecting(rect: ElementRect, viewport: Viewport) -> bool {
    rect.bottom > viewport.top && rect.top < viewport.bottom()
}
