use crate::{
    foundation::core::LayerId,
    foundation::error::{StackError, StackResult},
    registry::order::ZOrder,
    surface::handle::{LayerSurface, MapHandle},
};

/// Insertion point for a new layer, relative to layers already on the surface.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Anchor {
    /// Insert immediately below this mounted layer.
    Below(LayerId),
    /// Insert above everything currently mounted.
    Top,
}

impl Anchor {
    /// The before-id value expected by map-surface insertion calls.
    ///
    /// `None` means "place on top of everything".
    pub fn before_id(&self) -> Option<&LayerId> {
        match self {
            Self::Below(id) => Some(id),
            Self::Top => None,
        }
    }

    /// Consume the anchor into an owned before-id.
    pub fn into_before_id(self) -> Option<LayerId> {
        match self {
            Self::Below(id) => Some(id),
            Self::Top => None,
        }
    }
}

/// Properties handed to the surface's add-layer call for one layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LayerProps {
    /// The layer's own identifier.
    pub id: LayerId,
    /// The mounted layer to insert immediately below, if any.
    pub before_id: Option<LayerId>,
}

/// Resolve the insertion anchor for `layer` against a live surface.
///
/// Among the registry entries meant to be drawn above `layer`, the nearest
/// one already mounted on the surface is the anchor: inserting immediately
/// below it lands `layer` in its declared position no matter when the
/// surrounding layers mounted. When nothing above `layer` is mounted yet, the
/// layer goes on top of everything ([`Anchor::Top`]).
///
/// Returns a [`StackError::Registry`] if `layer` is not in the registry.
pub fn resolve_anchor<S: LayerSurface>(
    order: &ZOrder,
    surface: &S,
    layer: &LayerId,
) -> StackResult<Anchor> {
    let pos = order
        .position(layer)
        .ok_or_else(|| unregistered(layer))?;

    for id in order.iter().skip(pos + 1) {
        if surface.has_layer(id) {
            return Ok(Anchor::Below(id.clone()));
        }
    }
    Ok(Anchor::Top)
}

impl<S: LayerSurface> MapHandle<S> {
    /// Resolve the insertion anchor for `layer` against the shared surface.
    ///
    /// Registry membership is checked regardless of surface state. While the
    /// handle is still [`Uninitialized`](crate::MapState::Uninitialized) the
    /// mount query is skipped: a warning is logged and the layer is placed on
    /// top as a best-effort answer, which callers must tolerate during
    /// startup.
    #[tracing::instrument(skip(self, order))]
    pub fn resolve_anchor(&self, order: &ZOrder, layer: &LayerId) -> StackResult<Anchor> {
        match self.with_surface(|surface| resolve_anchor(order, surface, layer)) {
            Some(resolved) => resolved,
            None => {
                if !order.contains(layer) {
                    return Err(unregistered(layer));
                }
                tracing::warn!(
                    layer = %layer,
                    "anchor resolved before the map surface is ready; z-ordering may be incorrect"
                );
                Ok(Anchor::Top)
            }
        }
    }

    /// Resolve the full add-layer properties for `layer`.
    ///
    /// Use this for every layer component: it bundles the layer's identifier
    /// with its resolved before-anchor in the shape the surface's insertion
    /// call consumes.
    pub fn layer_props(&self, order: &ZOrder, layer: &LayerId) -> StackResult<LayerProps> {
        Ok(LayerProps {
            id: layer.clone(),
            before_id: self.resolve_anchor(order, layer)?.into_before_id(),
        })
    }
}

fn unregistered(layer: &LayerId) -> StackError {
    StackError::registry(format!("layer id '{layer}' is not in the z-order registry"))
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/anchor.rs"]
mod tests;
