//! A headless reveal-on-scroll engine.
//!
//! This crate tracks a set of elements and marks each one the first time it
//! enters the viewport. The marker is a one-way transition: once an element is
//! revealed it stays revealed, no matter where the viewport goes afterwards.
//! A styling layer (CSS class, TUI attribute, ...) consumes the marker to
//! drive the actual visual transition.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - element geometry (top/bottom extents in document coordinates)
//! - viewport geometry (scroll offset + visible height)
//! - the events that trigger scans (scroll ticks, or native intersection
//!   notifications via [`IntersectionEvents`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod attach;
mod key;
mod options;
mod source;
mod tracker;
mod types;


pub use attach::{TooltipProvider, attach};
pub use options::{OnChangeCallback, OnRevealCallback, TrackerOptions};
pub use source::{IntersectionEntry, IntersectionEvents, ObservationSource, ScrollPoll};
pub use tracker::RevealTracker;
pub use types::{ElementRect, RevealKey, RevealMargin, Viewport, is_intersecting};

#[doc(hidden)]
pub use key::TrackerKey;
