// src/gui/components/action_buttons.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_report = app.report.is_some();

    ui.horizontal(|ui| {
        // --- Format + Include headers ---
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            // Keep the text field in step unless the user typed their own path.
            if !app.state.gui.out_path_dirty {
                app.state.gui.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(has_report, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_report, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
