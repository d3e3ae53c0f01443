// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ csv, gui::app::App };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(report) = &app.report else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    let txt = csv::report_to_string(report, export.include_headers, export.delim());
    logf!("Copy: rows={}, format={:?}", report.rows.len(), export.format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
