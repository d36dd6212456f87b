//! Equipment panel using bevy_egui

use armory_scene::{EquipmentCatalog, EquippedItems};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use tracing::debug;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // UI system runs in EguiPrimaryContextPass for proper input
        // handling (bevy_egui 0.38+)
        app.add_systems(EguiPrimaryContextPass, equipment_panel);
    }
}

fn equipment_panel(
    mut contexts: EguiContexts,
    catalog: Res<EquipmentCatalog>,
    mut equipped: ResMut<EquippedItems>,
) {
    // Get the egui context - early return if not available
    let Ok(ctx) = contexts.ctx_mut() else { return };

    egui::SidePanel::right("equipment_panel")
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Equipment");
            ui.separator();

            for slot in catalog.0.slots() {
                let mut worn = equipped.0.is_equipped(&slot.id);
                if ui.checkbox(&mut worn, &slot.label).changed() {
                    equipped.0.toggle(&slot.id);
                    debug!(slot = %slot.id, worn, "Toggled equipment");
                }
            }

            ui.separator();
            ui.label("Controls:");
            ui.label("• Drag to orbit");
            ui.label("• Scroll to zoom");
        });
}
