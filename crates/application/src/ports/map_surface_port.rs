//! Map surface port
//!
//! The map is an explicit handle owned by whoever initialized it and passed
//! to the planner; implementations use interior mutability.

use domain::{LayerKind, MapLayer, MapView};
#[cfg(test)]
use mockall::automock;

/// Port for the map widget's layer operations
#[cfg_attr(test, automock)]
pub trait MapSurfacePort: Send + Sync {
    /// Replace the layer of `kind` and fit the view to it
    fn add_or_replace(&self, kind: LayerKind, layer: MapLayer);

    /// Remove the layer of `kind`; no-op when absent
    fn remove(&self, kind: LayerKind);

    /// Whether a layer of `kind` is present
    fn has_layer(&self, kind: LayerKind) -> bool;

    /// Copy of the layer of `kind`
    fn layer(&self, kind: LayerKind) -> Option<MapLayer>;

    /// Current view
    fn view(&self) -> MapView;
}
