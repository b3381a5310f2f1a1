use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Model requested; the spinning placeholder is visible.
    #[default]
    Loading,
    /// Model spawned; hotspots and orbit controls are live.
    Running,
    /// Every load attempt failed; the failure notice is visible.
    LoadFailed,
    /// Scene torn down until the next mount.
    Unmounted,
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Loading => "loading",
            AppState::Running => "running",
            AppState::LoadFailed => "load_failed",
            AppState::Unmounted => "unmounted",
        }
    }
}

pub fn log_state_transitions(mut transitions: EventReader<StateTransitionEvent<AppState>>) {
    for transition in transitions.read() {
        if let (Some(from), Some(to)) = (transition.exited, transition.entered) {
            info!("→ {} → {}", from.as_str(), to.as_str());
        }
    }
}

/// Request `target`, cancelling any pending transition when already there.
///
/// `NextState::set` re-runs exit and enter schedules for an identity
/// transition, which would tear down state-scoped entities.
pub fn request_state(current: &State<AppState>, next: &mut NextState<AppState>, target: AppState) {
    if *current.get() == target {
        next.reset();
    } else {
        next.set(target);
    }
}
