use std::{cell::RefCell, collections::HashSet, rc::Rc};

use crate::foundation::core::LayerId;

/// The capability a live rendering surface exposes to the resolver.
///
/// The resolver only ever asks one question: is a layer with this identifier
/// currently installed? Insertion stays with the caller: after resolving an
/// [`Anchor`](crate::Anchor), pass its before-id to the surface's own
/// add-layer call ("place immediately below this existing layer"; no anchor
/// means "place on top").
///
/// Mount state must be answered live. The resolver re-queries on every call
/// and never caches.
pub trait LayerSurface {
    /// Whether a layer with this identifier is currently installed.
    fn has_layer(&self, id: &LayerId) -> bool;
}

/// The simplest surface: a set of mounted identifiers.
///
/// Useful as a test double and for consumers that track mount state
/// themselves.
impl LayerSurface for HashSet<LayerId> {
    fn has_layer(&self, id: &LayerId) -> bool {
        self.contains(id)
    }
}

/// Lifecycle state of the shared map surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapState<S> {
    /// No surface yet; the map is still initializing.
    #[default]
    Uninitialized,
    /// The surface finished initializing and can be queried.
    Ready(S),
}

/// Single-slot shared handle to the live map surface.
///
/// The handle starts [`MapState::Uninitialized`] and is set once the surface
/// finishes initializing. Clones share the slot, so one handle can be created
/// at startup and passed to every component that needs the surface. Absence
/// is a valid, expected state during startup: readers must tolerate
/// [`MapHandle::with_surface`] returning `None`.
///
/// All access happens on a single UI thread; the handle is not `Send`/`Sync`
/// and takes no locks. `set` overwrites any previous surface
/// (last-write-wins), though in normal operation it is called once per
/// process lifetime.
#[derive(Debug)]
pub struct MapHandle<S> {
    state: Rc<RefCell<MapState<S>>>,
}

impl<S> MapHandle<S> {
    /// A handle with no surface yet.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MapState::Uninitialized)),
        }
    }

    /// Store the surface, replacing any previous one.
    pub fn set(&self, surface: S) {
        *self.state.borrow_mut() = MapState::Ready(surface);
    }

    /// Whether a surface has been stored.
    pub fn is_ready(&self) -> bool {
        matches!(&*self.state.borrow(), MapState::Ready(_))
    }

    /// Run `f` against the surface, or return `None` while uninitialized.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        match &*self.state.borrow() {
            MapState::Uninitialized => None,
            MapState::Ready(surface) => Some(f(surface)),
        }
    }
}

impl<S: Clone> MapHandle<S> {
    /// The current surface, or `None` while uninitialized.
    ///
    /// Surfaces are typically cheap shared handles to the real map widget, so
    /// cloning one out is the convenient read path; use
    /// [`MapHandle::with_surface`] to borrow instead.
    pub fn get(&self) -> Option<S> {
        self.with_surface(S::clone)
    }
}

impl<S> Clone for MapHandle<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<S> Default for MapHandle<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/handle.rs"]
mod tests;
