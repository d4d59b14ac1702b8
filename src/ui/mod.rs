pub mod debug_gizmos;
pub mod debug_hud;
pub mod debug_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::registry::AppState;
use crate::sets::GameSet;
use crate::wrap::WrapTracker;

/// Tracks debug overlay visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles the debug overlay on F3 press.
pub fn toggle_debug_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

fn debug_visible(state: Res<DebugUiState>) -> bool {
    state.visible
}

fn tracker_ready(tracker: Res<WrapTracker>) -> bool {
    tracker.is_ready()
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugUiState>()
            .add_systems(OnEnter(AppState::InGame), debug_hud::spawn_debug_hud)
            .add_systems(
                Update,
                (
                    toggle_debug_overlay,
                    debug_hud::update_debug_hud,
                    debug_gizmos::draw_wrap_gizmos.run_if(debug_visible.and(tracker_ready)),
                )
                    .chain()
                    .in_set(GameSet::Ui)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                debug_panel::draw_debug_panel
                    .run_if(in_state(AppState::InGame).and(debug_visible)),
            );
    }
}
