use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::ship::{Ship, Velocity};
use crate::wrap::machine::WrapPhase;
use crate::wrap::visibility::is_visible;
use crate::wrap::WrapTracker;

fn phase_label(phase: WrapPhase) -> (&'static str, egui::Color32) {
    match phase {
        WrapPhase::PrimaryVisible => ("visible", egui::Color32::LIGHT_GREEN),
        WrapPhase::PrimaryHidden => ("hidden", egui::Color32::YELLOW),
    }
}

fn on_screen_label(visible: bool) -> (&'static str, egui::Color32) {
    if visible {
        ("yes", egui::Color32::LIGHT_GREEN)
    } else {
        ("no", egui::Color32::YELLOW)
    }
}

/// Draws the wrap inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    tracker: Res<WrapTracker>,
    ship_query: Query<(&Transform, &Velocity), With<Ship>>,
    diagnostics: Res<DiagnosticsStore>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Debug Panel");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("FPS:");
                let fps_text = diagnostics
                    .get(&FrameTimeDiagnosticsPlugin::FPS)
                    .and_then(|d| d.smoothed())
                    .map(|v| format!("{v:.1}"))
                    .unwrap_or_else(|| "...".to_string());
                ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
            });

            // --- Ship ---
            egui::CollapsingHeader::new(egui::RichText::new("Ship").strong())
                .default_open(true)
                .show(ui, |ui| {
                    let Ok((transform, velocity)) = ship_query.single() else {
                        ui.label("No ship entity");
                        return;
                    };
                    let (_, _, angle) = transform.rotation.to_euler(EulerRot::XYZ);
                    egui::Grid::new("ship_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Position:");
                            ui.monospace(format!(
                                "{:.1}, {:.1}",
                                transform.translation.x, transform.translation.y
                            ));
                            ui.end_row();

                            ui.label("Velocity:");
                            ui.monospace(format!("{:.1}, {:.1}", velocity.0.x, velocity.0.y));
                            ui.end_row();

                            ui.label("Heading:");
                            ui.monospace(format!("{:.1}°", angle.to_degrees()));
                            ui.end_row();
                        });
                });

            // --- Wrap ---
            egui::CollapsingHeader::new(egui::RichText::new("Wrap").strong())
                .default_open(true)
                .show(ui, |ui| {
                    let Ok(bounds) = tracker.bounds() else {
                        ui.colored_label(egui::Color32::DARK_GRAY, "(bounds not initialised)");
                        return;
                    };
                    egui::Grid::new("wrap_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Bounds:");
                            ui.monospace(format!(
                                "{:.0}, {:.0} → {:.0}, {:.0}",
                                bounds.min().x,
                                bounds.min().y,
                                bounds.max().x,
                                bounds.max().y
                            ));
                            ui.end_row();

                            ui.label("Phase:");
                            let (text, color) = phase_label(tracker.phase());
                            ui.colored_label(color, text);
                            ui.end_row();

                            ui.label("On screen:");
                            let (text, color) = on_screen_label(tracker.primary_visible());
                            ui.colored_label(color, text);
                            ui.end_row();

                            ui.label("Swaps:");
                            ui.monospace(format!("{}", tracker.swap_count()));
                            ui.end_row();
                        });

                    let Some(ghosts) = tracker.ghosts() else {
                        return;
                    };
                    ui.separator();
                    egui::Grid::new("ghost_grid")
                        .num_columns(4)
                        .spacing([12.0, 2.0])
                        .show(ui, |ui| {
                            for ghost in ghosts {
                                ui.monospace(format!("#{}", ghost.index));
                                ui.monospace(format!(
                                    "{:+.0}w {:+.0}h",
                                    ghost.offset.x / bounds.width(),
                                    ghost.offset.y / bounds.height()
                                ));
                                ui.monospace(format!(
                                    "{:.0}, {:.0}",
                                    ghost.position().x,
                                    ghost.position().y
                                ));
                                if is_visible(&ghost.object, bounds) {
                                    ui.colored_label(egui::Color32::LIGHT_BLUE, "visible");
                                } else {
                                    ui.colored_label(egui::Color32::GRAY, "off");
                                }
                                ui.end_row();
                            }
                        });
                });
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_screen_row_matches_phase_colours() {
        assert_eq!(
            on_screen_label(true).1,
            phase_label(WrapPhase::PrimaryVisible).1
        );
        assert_eq!(
            on_screen_label(false).1,
            phase_label(WrapPhase::PrimaryHidden).1
        );
        assert_eq!(on_screen_label(true).0, "yes");
        assert_eq!(on_screen_label(false).0, "no");
    }
}
