use bevy::prelude::*;
use constants::hotspot::LABEL_OFFSET;
use constants::render_settings::{LABEL_BACKGROUND, LABEL_FONT_SIZE, LABEL_TEXT};

use super::state::{HotspotLabel, HotspotLabelText, HoverState};
use crate::engine::core::config::{HotspotDef, SceneConfig};
use crate::engine::scene::root::ModelFrame;

pub fn spawn_hotspot_label(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hotspot label"),
            HotspotLabel,
            Node {
                position_type: PositionType::Absolute,
                padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(LABEL_BACKGROUND),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                HotspotLabelText,
                Text::new(""),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(LABEL_TEXT),
            ));
        });
}

/// World-space anchor of a hotspot's label, offset within the model frame.
pub fn label_anchor(frame: &GlobalTransform, hotspot: &HotspotDef) -> Vec3 {
    frame.transform_point(hotspot.local_position() + Vec3::from_array(LABEL_OFFSET))
}

/// Show the label beside the hovered hotspot; hide it otherwise.
pub fn update_hover_label(
    hover: Res<HoverState>,
    config: Res<SceneConfig>,
    frames: Query<&GlobalTransform, With<ModelFrame>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(&mut Node, &mut Visibility), With<HotspotLabel>>,
    mut texts: Query<&mut Text, With<HotspotLabelText>>,
) {
    let placement = hover
        .current()
        .and_then(|id| config.hotspots.get(id))
        .and_then(|hotspot| {
            let frame = frames.single().ok()?;
            let (camera, camera_transform) = cameras.single().ok()?;
            let screen = camera
                .world_to_viewport(camera_transform, label_anchor(frame, hotspot))
                .ok()?;
            Some((hotspot.label.as_str(), screen))
        });

    for (mut node, mut visibility) in &mut labels {
        match placement {
            Some((_, screen)) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                visibility.set_if_neq(Visibility::Visible);
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    if let Some((label, _)) = placement {
        for mut text in &mut texts {
            if text.0 != label {
                text.0 = label.to_string();
            }
        }
    }
}
