//! Live-resource accounting for scene rebuilds.
//!
//! Every geometry, material and texture a [`SceneContext`](super::SceneContext)
//! allocates is wrapped in a [`Tracked`] handle. The handle bumps a shared
//! counter on creation and drops it again when released, so a rebuild that
//! forgets to free something shows up as a growing live count.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Geometry,
    Material,
    Texture,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Geometry,
        ResourceKind::Material,
        ResourceKind::Texture,
    ];

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default)]
struct Counters {
    live: [AtomicUsize; 3],
    allocated: [AtomicUsize; 3],
}

/// Shared counters; cloning yields a handle to the same counts.
#[derive(Debug, Clone, Default)]
pub struct ResourceTracker {
    counters: Arc<Counters>,
}

impl ResourceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` as a live resource of `kind`.
    pub fn track<T>(&self, kind: ResourceKind, value: T) -> Tracked<T> {
        self.counters.live[kind.slot()].fetch_add(1, Ordering::Relaxed);
        self.counters.allocated[kind.slot()].fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            kind,
            tracker: self.clone(),
        }
    }

    /// Resources of `kind` currently alive.
    pub fn live(&self, kind: ResourceKind) -> usize {
        self.counters.live[kind.slot()].load(Ordering::Relaxed)
    }

    /// Resources of every kind currently alive.
    pub fn total_live(&self) -> usize {
        ResourceKind::ALL.iter().map(|&k| self.live(k)).sum()
    }

    /// Resources of `kind` ever allocated through this tracker.
    pub fn allocated(&self, kind: ResourceKind) -> usize {
        self.counters.allocated[kind.slot()].load(Ordering::Relaxed)
    }

    fn release(&self, kind: ResourceKind) {
        self.counters.live[kind.slot()].fetch_sub(1, Ordering::Relaxed);
    }
}

/// A resource that counts itself live until dropped.
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    kind: ResourceKind,
    tracker: ResourceTracker,
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tracked<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.tracker.release(self.kind);
    }
}
