// src/gui/components/totals_panel.rs

use eframe::egui::{ self, RichText };

use crate::report::{ table, Report };

pub fn draw(ui: &mut egui::Ui, report: &Report) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Totals").heading());
        ui.label(format!("({} issues)", report.rows.len()));
    });

    egui::Grid::new("totals_grid")
        .striped(true)
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in table::totals_cells(&report.totals, report.variant) {
                ui.label(label);
                ui.label(RichText::new(value).strong().monospace());
                ui.end_row();
            }
        });
}
