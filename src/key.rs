#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type ElementMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type ElementMap<K, V> = BTreeMap<K, V>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait TrackerKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> TrackerKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait TrackerKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> TrackerKey for K {}
