// src/gui/components/input_bar.rs
//
// Input file, report options and the Generate button.

use eframe::egui::{ self, widgets::Spinner };

use crate::{
    config::options::ReportVariant,
    gui::{ actions, app::App },
    specs::fields::ZeroPolicy,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Jira Report Calculator");
    ui.label("Export your filtered JIRA issues to HTML, then use this tool to calculate the story points.");
    ui.add_space(4.0);

    // --- Input file ---
    let mut load_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Jira HTML file:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_path_text)
                .hint_text("path/to/export.html")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        if ui.button("Load").clicked() {
            load_clicked = true;
        }
        if let Some(doc) = &app.document {
            let name = doc.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            ui.label(egui::RichText::new(name).italics());
        }
    });

    if load_clicked {
        let path = app.state.gui.input_path_text.trim().into();
        actions::load(app, path);
    }

    // --- Options + Generate ---
    ui.horizontal(|ui| {
        let report = &mut app.state.options.report;
        let before = report.clone();

        egui::ComboBox::from_label("Fields")
            .selected_text(report.variant.label())
            .show_ui(ui, |ui| {
                for v in ReportVariant::ALL {
                    ui.selectable_value(&mut report.variant, v, v.label());
                }
            });

        let mut legacy = matches!(report.zero_policy, ZeroPolicy::Falsy);
        if ui
            .checkbox(&mut legacy, "Zero counts as missing")
            .on_hover_text("Legacy fallback: an estimate of 0 falls through to the next field")
            .changed()
        {
            report.zero_policy = if legacy { ZeroPolicy::Falsy } else { ZeroPolicy::Present };
        }

        if *report != before {
            logf!("UI: report options → {:?}", report);
            app.options_changed();
        }

        ui.separator();

        let generate = ui.add_enabled(
            app.generate_enabled,
            egui::Button::new(egui::RichText::new("Generate").strong()),
        );
        if generate.clicked() {
            actions::generate(app);
        }

        if app.target_pending() {
            ui.add(Spinner::new().size(14.0));
            ui.label("fetching monthly target…");
        }
    });
}
