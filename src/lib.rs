//! Mapstack computes deterministic z-ordering anchors for map overlay layers.
//!
//! Interactive map UIs add and remove overlay layers from independent component
//! lifecycles, so the order in which layers reach the rendering surface is
//! unpredictable (hot-reload makes it worse). Mapstack replaces "whatever order
//! components happened to mount in" with a single declarative draw order:
//!
//! 1. **Declare**: list every layer identifier once, bottom to top, in a
//!    [`ZOrder`] registry validated at startup.
//! 2. **Share**: hold the live map surface in a [`MapHandle`], a single-slot
//!    cell that starts [`MapState::Uninitialized`] and is set once the surface
//!    finishes initializing.
//! 3. **Resolve**: before adding a layer, ask [`resolve_anchor`] (or
//!    [`MapHandle::resolve_anchor`]) for the [`Anchor`] to insert below, then
//!    pass it to the surface's own insertion call.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Registry is the single source of truth**: the resolver never infers
//!   order from mount sequence, and every identifier it sees must be
//!   registered. An unregistered identifier is a configuration error, not a
//!   condition to recover from.
//! - **Always a live query**: mounted-layer state is read from the surface on
//!   every call, never cached, so any mount/unmount interleaving yields a
//!   consistent stack.
//! - **Single-threaded**: all access happens on the host UI thread; calls are
//!   synchronous and complete before returning.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod registry;
mod resolve;
mod surface;

pub use foundation::core::LayerId;
pub use foundation::error::{StackError, StackResult};
pub use registry::order::ZOrder;
pub use resolve::anchor::{Anchor, LayerProps, resolve_anchor};
pub use surface::handle::{LayerSurface, MapHandle, MapState};
