use std::collections::HashMap;

use crate::{
    foundation::core::LayerId,
    foundation::error::{StackError, StackResult},
};

/// The authoritative draw order for every known layer.
///
/// Position defines draw priority: later entries are drawn on top of earlier
/// ones. The registry is fixed at startup and shared by all resolver calls;
/// it is the single source of truth for stacking, regardless of the order in
/// which layers actually reach the surface.
///
/// Every identifier appears exactly once. Uniqueness is enforced at
/// construction, so a registry value in hand is always well-formed.
///
/// A registry serializes as a plain JSON array of identifier strings, bottom
/// to top, and deserialization runs the same validation as [`ZOrder::new`]:
///
/// ```
/// use mapstack::ZOrder;
///
/// let order = ZOrder::from_json(r#"["basemap-labels", "polygons", "labels"]"#)?;
/// assert_eq!(order.len(), 3);
/// # Ok::<(), mapstack::StackError>(())
/// ```
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<LayerId>", into = "Vec<LayerId>")]
pub struct ZOrder {
    ids: Vec<LayerId>,
    index: HashMap<LayerId, usize>,
}

impl ZOrder {
    /// Build a registry from identifiers listed bottom to top.
    ///
    /// Returns a [`StackError::Validation`] if any identifier appears more
    /// than once.
    pub fn new<I, T>(ids: I) -> StackResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<LayerId>,
    {
        let ids: Vec<LayerId> = ids.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(ids.len());
        for (pos, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), pos).is_some() {
                return Err(StackError::validation(format!(
                    "duplicate layer id '{id}' in z-order registry"
                )));
            }
        }
        Ok(Self { ids, index })
    }

    /// Parse a registry from a JSON array of identifier strings.
    pub fn from_json(json: &str) -> StackResult<Self> {
        serde_json::from_str(json).map_err(|e| StackError::serde(e.to_string()))
    }

    /// The registry position of `id`, or `None` if it is not registered.
    pub fn position(&self, id: &LayerId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &LayerId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Registered identifiers in draw order, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &LayerId> {
        self.ids.iter()
    }
}

impl TryFrom<Vec<LayerId>> for ZOrder {
    type Error = StackError;

    fn try_from(ids: Vec<LayerId>) -> StackResult<Self> {
        Self::new(ids)
    }
}

impl From<ZOrder> for Vec<LayerId> {
    fn from(order: ZOrder) -> Self {
        order.ids
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/order.rs"]
mod tests;
