use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::AppState;
use crate::engine::core::config::{HotspotId, SceneConfig};
use crate::engine::core::lifecycle::SceneLifecycleEvent;
use crate::engine::loading::ModelLoadState;
use crate::engine::systems::fps_tracking::{current_fps, fps_notification_system};
use crate::tools::hotspots::{HotspotActivated, HotspotHoverChanged, HotspotPointerEvent};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

pub const HOTSPOT_HOVER_CHANGED: &str = "hotspot_hover_changed";
pub const HOTSPOT_ACTIVATED: &str = "hotspot_activated";
pub const MODEL_LOAD_STATE: &str = "model_load_state";
pub const FPS_UPDATE: &str = "fps_update";

/// Notifications the scene emits; never accepted as inbound requests.
const OUTBOUND_NOTIFICATIONS: [&str; 4] = [
    HOTSPOT_HOVER_CHANGED,
    HOTSPOT_ACTIVATED,
    MODEL_LOAD_STATE,
    FPS_UPDATE,
];

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the host page.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage RPC layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    (
                        notify_hotspot_events,
                        notify_model_load_state,
                        fps_notification_system,
                    ),
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let Some(window) = window() else {
        error!("Window object not available, RPC listener not installed");
        return;
    };

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();
    let own_window = JsValue::from(window.clone());

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Messages this window posted to itself are our own output.
        if event
            .source()
            .is_some_and(|source| JsValue::from(source) == own_window)
        {
            return;
        }

        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Classified content of a `message` event.
#[derive(Debug)]
enum InboundMessage {
    Request(RpcRequest),
    /// A response or notification of the kind the scene itself sends.
    Echo,
    Malformed(String),
}

fn parse_inbound(content: &str) -> InboundMessage {
    let value = match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => value,
        Err(e) => return InboundMessage::Malformed(e.to_string()),
    };

    let method = value.get("method").and_then(|method| method.as_str());
    let is_response = value.get("result").is_some() || value.get("error").is_some();
    match method {
        None if is_response => return InboundMessage::Echo,
        Some(method) if OUTBOUND_NOTIFICATIONS.contains(&method) => return InboundMessage::Echo,
        _ => {}
    }

    match serde_json::from_value::<RpcRequest>(value) {
        Ok(request) => InboundMessage::Request(request),
        Err(e) => InboundMessage::Malformed(e.to_string()),
    }
}

/// Read-only view of the scene used to answer requests.
struct RpcContext<'a> {
    config: &'a SceneConfig,
    load_state: &'a ModelLoadState,
    app_state: AppState,
    fps: f32,
}

/// Commands a request asks the scene to carry out.
#[derive(Default, Debug)]
struct RpcEffects {
    lifecycle: Vec<SceneLifecycleEvent>,
    pointer: Vec<HotspotPointerEvent>,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    config: Res<SceneConfig>,
    load_state: Res<ModelLoadState>,
    app_state: Res<State<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut lifecycle_events: EventWriter<SceneLifecycleEvent>,
    mut pointer_events: EventWriter<HotspotPointerEvent>,
) {
    let context = RpcContext {
        config: &config,
        load_state: &load_state,
        app_state: *app_state.get(),
        fps: current_fps(&diagnostics),
    };

    for event in events.read() {
        match parse_inbound(&event.content) {
            InboundMessage::Request(request) => {
                let mut effects = RpcEffects::default();
                if let Some(response) = handle_rpc_request(&request, &context, &mut effects) {
                    rpc_interface.queue_response(response);
                }
                lifecycle_events.write_batch(effects.lifecycle);
                pointer_events.write_batch(effects.pointer);
            }
            InboundMessage::Echo => {
                debug!("Ignoring scene-originated RPC message");
            }
            InboundMessage::Malformed(reason) => {
                warn!("Ignoring malformed RPC message: {}", reason);
            }
        }
    }
}

/// Handle one request. Side effects apply to notifications too; only requests
/// with an id get a response.
fn handle_rpc_request(
    request: &RpcRequest,
    context: &RpcContext,
    effects: &mut RpcEffects,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_hotspots" => handle_get_hotspots(context.config),
        "get_model_state" => handle_get_model_state(context),
        "get_fps" => Ok(serde_json::json!({ "fps": context.fps })),
        "mount_scene" => handle_lifecycle(SceneLifecycleEvent::Mount, effects),
        "unmount_scene" => handle_lifecycle(SceneLifecycleEvent::Unmount, effects),
        "activate_hotspot" => handle_activate_hotspot(&request.params, context.config, effects),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_get_hotspots(config: &SceneConfig) -> Result<serde_json::Value, RpcError> {
    let hotspots = serde_json::to_value(&config.hotspots.hotspots)
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({
        "enabled": config.hotspots.enabled,
        "hotspots": hotspots
    }))
}

fn handle_get_model_state(context: &RpcContext) -> Result<serde_json::Value, RpcError> {
    let model = serde_json::to_value(context.load_state)
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    Ok(serde_json::json!({
        "app_state": context.app_state.as_str(),
        "model": model
    }))
}

fn handle_lifecycle(
    event: SceneLifecycleEvent,
    effects: &mut RpcEffects,
) -> Result<serde_json::Value, RpcError> {
    info!("Lifecycle request via RPC: {:?}", event);
    effects.lifecycle.push(event);
    Ok(serde_json::json!({ "success": true }))
}

/// Activate a hotspot as if it were clicked.
fn handle_activate_hotspot(
    params: &serde_json::Value,
    config: &SceneConfig,
    effects: &mut RpcEffects,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ActivateParams {
        id: HotspotId,
    }

    if !config.hotspots.enabled {
        return Err(RpcError::hotspots_disabled());
    }

    let parsed = serde_json::from_value::<ActivateParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'id' parameter"))?;

    let hotspot = config
        .hotspots
        .get(&parsed.id)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown hotspot: {}", parsed.id)))?;

    effects
        .pointer
        .push(HotspotPointerEvent::Click(hotspot.id.clone()));

    Ok(serde_json::json!({
        "success": true,
        "section": hotspot.section
    }))
}

fn notify_hotspot_events(
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut hover_changed: EventReader<HotspotHoverChanged>,
    mut activated: EventReader<HotspotActivated>,
) {
    for change in hover_changed.read() {
        rpc_interface.send_notification(
            HOTSPOT_HOVER_CHANGED,
            serde_json::json!({
                "previous": change.previous,
                "current": change.current
            }),
        );
    }

    for activation in activated.read() {
        rpc_interface.send_notification(
            HOTSPOT_ACTIVATED,
            serde_json::json!({
                "hotspot": activation.hotspot,
                "section": activation.section
            }),
        );
    }
}

fn notify_model_load_state(
    mut rpc_interface: ResMut<WebRpcInterface>,
    load_state: Res<ModelLoadState>,
) {
    if !load_state.is_changed() {
        return;
    }
    match serde_json::to_value(&*load_state) {
        Ok(params) => rpc_interface.send_notification(MODEL_LOAD_STATE, params),
        Err(e) => error!("Failed to serialise model load state: {}", e),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        // A top-level page is its own parent; posting would echo back.
                        if JsValue::from(parent.clone()) == JsValue::from(window.clone()) {
                            return;
                        }
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    /// Server-defined error for hotspot requests while hotspots are switched off.
    pub fn hotspots_disabled() -> Self {
        Self {
            code: -32001,
            message: "Hotspots are disabled".to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str, params: serde_json::Value, id: Option<i64>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: id.map(serde_json::Value::from),
        }
    }

    fn respond(request: &RpcRequest, effects: &mut RpcEffects) -> Option<RpcResponse> {
        let config = SceneConfig::authored();
        let load_state = ModelLoadState::Loaded { vertex_count: 12 };
        let context = RpcContext {
            config: &config,
            load_state: &load_state,
            app_state: AppState::Running,
            fps: 60.0,
        };
        handle_rpc_request(request, &context, effects)
    }

    #[test]
    fn get_hotspots_lists_authored_links() {
        let response = respond(
            &request("get_hotspots", serde_json::Value::Null, Some(1)),
            &mut RpcEffects::default(),
        )
        .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["enabled"], true);
        assert_eq!(result["hotspots"].as_array().unwrap().len(), 5);
        assert_eq!(result["hotspots"][4]["id"], "power");
        assert_eq!(result["hotspots"][4]["section"], "6");
    }

    #[test]
    fn get_model_state_reports_both_states() {
        let response = respond(
            &request("get_model_state", serde_json::Value::Null, Some(2)),
            &mut RpcEffects::default(),
        )
        .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["app_state"], "running");
        assert_eq!(result["model"]["state"], "loaded");
        assert_eq!(result["model"]["vertex_count"], 12);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let response = respond(
            &request("teleport", serde_json::Value::Null, Some(3)),
            &mut RpcEffects::default(),
        )
        .unwrap();

        assert_eq!(response.error.unwrap().code, -32601);
        assert!(response.result.is_none());
    }

    #[test]
    fn notifications_act_without_a_response() {
        let mut effects = RpcEffects::default();
        let response = respond(
            &request("unmount_scene", serde_json::Value::Null, None),
            &mut effects,
        );

        assert!(response.is_none());
        assert_eq!(effects.lifecycle, vec![SceneLifecycleEvent::Unmount]);
    }

    #[test]
    fn activate_hotspot_validates_the_id() {
        let mut effects = RpcEffects::default();
        let response = respond(
            &request("activate_hotspot", serde_json::json!({ "id": "power" }), Some(4)),
            &mut effects,
        )
        .unwrap();
        assert_eq!(response.result.unwrap()["section"], "6");
        assert_eq!(
            effects.pointer,
            vec![HotspotPointerEvent::Click(HotspotId::new("power"))]
        );

        let mut effects = RpcEffects::default();
        let response = respond(
            &request("activate_hotspot", serde_json::json!({ "id": "tail" }), Some(5)),
            &mut effects,
        )
        .unwrap();
        assert_eq!(response.error.unwrap().code, -32602);
        assert!(effects.pointer.is_empty());
    }

    #[test]
    fn requests_without_params_parse() {
        let parsed: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_fps","id":7}"#).unwrap();
        assert_eq!(parsed.params, serde_json::Value::Null);
        assert_eq!(parsed.id, Some(serde_json::Value::from(7)));
    }

    #[test]
    fn activate_hotspot_is_refused_while_hotspots_are_disabled() {
        let config = SceneConfig::authored().with_hotspots_enabled(false);
        let load_state = ModelLoadState::Loaded { vertex_count: 12 };
        let context = RpcContext {
            config: &config,
            load_state: &load_state,
            app_state: AppState::Running,
            fps: 60.0,
        };
        let mut effects = RpcEffects::default();

        let response = handle_rpc_request(
            &request("activate_hotspot", serde_json::json!({ "id": "power" }), Some(9)),
            &context,
            &mut effects,
        )
        .unwrap();

        assert_eq!(response.error, Some(RpcError::hotspots_disabled()));
        assert!(response.result.is_none());
        assert!(effects.pointer.is_empty());
    }

    #[test]
    fn scene_output_is_never_handled_as_a_request() {
        let mut rpc = WebRpcInterface::default();
        for method in OUTBOUND_NOTIFICATIONS {
            rpc.send_notification(method, serde_json::json!({ "fps": 60.0 }));
        }
        for notification in &rpc.outgoing_notifications {
            let echoed = serde_json::to_string(notification).unwrap();
            assert!(
                matches!(parse_inbound(&echoed), InboundMessage::Echo),
                "{echoed}"
            );
        }

        let response = respond(
            &request("get_fps", serde_json::Value::Null, Some(8)),
            &mut RpcEffects::default(),
        )
        .unwrap();
        let echoed = serde_json::to_string(&response).unwrap();
        assert!(matches!(parse_inbound(&echoed), InboundMessage::Echo));
    }

    #[test]
    fn host_messages_are_requests_or_malformed() {
        let notification = r#"{"jsonrpc":"2.0","method":"unmount_scene"}"#;
        match parse_inbound(notification) {
            InboundMessage::Request(request) => {
                assert_eq!(request.method, "unmount_scene");
                assert!(request.id.is_none());
            }
            other => panic!("expected a request, got {other:?}"),
        }

        assert!(matches!(
            parse_inbound(r#"{"jsonrpc":"2.0","id":1}"#),
            InboundMessage::Malformed(_)
        ));
        assert!(matches!(
            parse_inbound("jsonrpc, but not JSON"),
            InboundMessage::Malformed(_)
        ));
    }
}
