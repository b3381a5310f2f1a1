//! Asynchronous model loading with retry and a mount guard.
//!
//! The PLY decode runs on the asset task pool. A polling system applies the
//! result on the main schedule, retries failures with exponential backoff and
//! discards anything that completes after the scene was unmounted.

/// Model loader resource and the polling system that spawns the point cloud.
pub mod model_loader;

/// Observable load state published to the scene and the RPC bridge.
pub mod progress;

/// Retry policy with exponential backoff between attempts.
pub mod retry;

pub use model_loader::{ModelLoader, poll_model_load};
pub use progress::ModelLoadState;
pub use retry::RetryPolicy;
