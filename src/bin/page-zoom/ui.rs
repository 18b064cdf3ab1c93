//! Settings panel rendering for the demo surface.

use eframe::egui;

use crate::PageZoomApp;

impl PageZoomApp {
    /// Renders the zoom settings panel: stepper buttons, slider, percent
    /// readout and reset control.
    pub fn show_settings(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Page zoom");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.update.can_decrease, egui::Button::new("−"))
                    .on_hover_text("Zoom out")
                    .clicked()
                {
                    let result = self.controller.decrease();
                    self.apply(result);
                }

                let mut bar = self.update.bar;
                let slider =
                    egui::Slider::new(&mut bar, 0..=self.controller.max_bar()).show_value(false);
                if ui.add(slider).changed() {
                    let result = self.controller.set_bar(bar);
                    self.apply(result);
                }

                if ui
                    .add_enabled(self.update.can_increase, egui::Button::new("+"))
                    .on_hover_text("Zoom in")
                    .clicked()
                {
                    let result = self.controller.increase();
                    self.apply(result);
                }

                ui.label(&self.percent);
            });

            ui.add_space(8.0);
            if ui.button("Reset to default").clicked() {
                let result = self.controller.reset();
                self.apply(result);
            }

            if self.adjustment.enabled
                && (self.adjustment.system_scale != 1.0 || self.adjustment.desktop_scale != 1.0)
            {
                ui.add_space(12.0);
                ui.separator();
                ui.label(format!(
                    "Persisted factors carry font scale {} × desktop scale {}",
                    self.adjustment.system_scale, self.adjustment.desktop_scale
                ));
            }
        });
    }
}
