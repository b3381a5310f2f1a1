use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FPS_NOTIFY_INTERVAL_SECS;

use crate::rpc::web_rpc::{FPS_UPDATE, WebRpcInterface};

/// Smoothed frame rate, or zero before the first measurement.
pub fn current_fps(diagnostics: &DiagnosticsStore) -> f32 {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .map(|value| value as f32)
        .unwrap_or(0.0)
}

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let Some(diagnostics) = diagnostics else {
        return;
    };
    let current_time = time.elapsed_secs();

    if current_time - *last_send_time >= FPS_NOTIFY_INTERVAL_SECS {
        if let Some(value) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
        {
            rpc_interface.send_notification(
                FPS_UPDATE,
                serde_json::json!({
                    "fps": value as f32
                }),
            );
            *last_send_time = current_time;
        }
    }
}
