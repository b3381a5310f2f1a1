/// Point cloud asset, relative to the asset root.
pub const MODEL_ASSET_PATH: &str = "models/sam3d-splat.ply";

/// Point cloud material shader, relative to the asset root.
pub const POINT_CLOUD_SHADER_PATH: &str = "shaders/point_cloud.wgsl";

/// CSS selector of the canvas the wasm build renders into.
pub const CANVAS_SELECTOR: &str = "#robot-scene";

/// Attempts made at loading the model before giving up.
pub const MODEL_LOAD_ATTEMPTS: u32 = 3;
/// Delay before the first retry; doubles on each further retry.
pub const MODEL_RETRY_BASE_SECS: f32 = 1.0;
pub const MODEL_RETRY_FACTOR: f32 = 2.0;
