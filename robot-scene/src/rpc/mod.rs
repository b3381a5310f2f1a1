//! JSON-RPC 2.0 communication layer for the host page.
//!
//! The scene usually runs in an iframe or beside the content column; the host
//! page talks to it through `postMessage`, using requests (with an id, which
//! get a response) and notifications (no id, no response).
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! Calling from the page:
//!
//! ```typescript
//! scene.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "get_model_state",
//!   id: 1
//! }), "*");
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//! - `-32001`: Hotspots are disabled (`activate_hotspot`)
//!
//! Malformed messages are logged and dropped. Messages the scene posted
//! itself (its notifications and responses) are ignored when they come back,
//! and nothing is posted when the scene is the top-level page.
//!
//! ## Methods
//!
//! ### Scene
//! - `get_hotspots`: Hotspot definitions and the enabled flag
//! - `get_model_state`: Model load state and app state
//! - `mount_scene` / `unmount_scene`: Lifecycle control
//! - `activate_hotspot { id }`: Scroll to a hotspot's section as if clicked
//!
//! ### Diagnostics
//! - `get_fps`: Current frame rate
//!
//! ## Notifications
//! - `hotspot_hover_changed { previous, current }`
//! - `hotspot_activated { hotspot, section }`
//! - `model_load_state`: Sent whenever the load state changes
//! - `fps_update { fps }`: Every half second

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
