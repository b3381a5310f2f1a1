use bevy::prelude::*;
use constants::render_settings::{
    LABEL_BACKGROUND, LABEL_FONT_SIZE, LABEL_TEXT, PLACEHOLDER_COLOUR, PLACEHOLDER_MAJOR_RADIUS,
    PLACEHOLDER_MINOR_RADIUS, PLACEHOLDER_SPIN_SPEED,
};

/// Spinning torus shown while the model loads.
#[derive(Component)]
pub struct LoadingPlaceholder;

/// Visible notice shown once every load attempt has failed.
#[derive(Component)]
pub struct LoadFailedNotice;

pub fn spawn_loading_placeholder(
    commands: &mut Commands,
    root: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let torus = Torus {
        minor_radius: PLACEHOLDER_MINOR_RADIUS,
        major_radius: PLACEHOLDER_MAJOR_RADIUS,
    };

    let placeholder = commands
        .spawn((
            Name::new("Loading placeholder"),
            LoadingPlaceholder,
            Mesh3d(
                meshes.add(
                    torus
                        .mesh()
                        .minor_resolution(16)
                        .major_resolution(32),
                ),
            ),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: PLACEHOLDER_COLOUR,
                ..default()
            })),
            Transform::default(),
        ))
        .id();

    commands.entity(root).add_child(placeholder);
}

pub fn spin_loading_placeholder(
    time: Res<Time>,
    mut placeholders: Query<&mut Transform, With<LoadingPlaceholder>>,
) {
    let angle = time.elapsed_secs() * PLACEHOLDER_SPIN_SPEED;
    for mut transform in &mut placeholders {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

pub fn despawn_loading_placeholder(
    mut commands: Commands,
    placeholders: Query<Entity, With<LoadingPlaceholder>>,
) {
    for entity in &placeholders {
        commands.entity(entity).despawn();
    }
}

pub fn spawn_load_failed_notice(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Load failed notice"),
            LoadFailedNotice,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(LABEL_BACKGROUND),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Model unavailable"),
                        TextFont {
                            font_size: LABEL_FONT_SIZE,
                            ..default()
                        },
                        TextColor(LABEL_TEXT),
                    ));
                });
        });
}

pub fn despawn_load_failed_notice(
    mut commands: Commands,
    notices: Query<Entity, With<LoadFailedNotice>>,
) {
    for entity in &notices {
        commands.entity(entity).despawn();
    }
}
