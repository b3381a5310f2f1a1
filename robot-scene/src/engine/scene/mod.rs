//! Scene graph for the mounted robot model.
//!
//! Everything spawned for a mount hangs under a single [`SceneRoot`](root::SceneRoot)
//! so unmounting is one recursive despawn. The point cloud and the hotspot
//! markers share the [`ModelFrame`](root::ModelFrame) child.

/// Loading spinner and the failure notice shown when the model is unavailable.
pub mod placeholder;

/// Point cloud entity creation from decoded geometry.
pub mod point_cloud;

/// Scene root and model frame entities.
pub mod root;
