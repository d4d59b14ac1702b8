use bevy::prelude::*;

use crate::ship::Ship;
use crate::wrap::WrapTracker;

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("X: 0.0 Y: 0.0 (wraps 0)"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn hud_line(position: Vec2, swaps: u64) -> String {
    format!("X: {:.0} Y: {:.0} (wraps {swaps})", position.x, position.y)
}

pub fn update_debug_hud(
    ship_query: Query<&Transform, With<Ship>>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
    tracker: Res<WrapTracker>,
) {
    let Ok(ship_tf) = ship_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    **text = hud_line(ship_tf.translation.truncate(), tracker.swap_count());
}
