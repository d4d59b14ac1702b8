use bevy::prelude::*;

/// Top-level system ordering sets for the game loop.
///
/// Configured as a chain: Input → Physics → Wrap → Ui.
/// Individual plugins place their systems into the appropriate set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Physics,
    Wrap,
    Ui,
}

pub fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (GameSet::Input, GameSet::Physics, GameSet::Wrap, GameSet::Ui).chain(),
    );
}
