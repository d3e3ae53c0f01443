// src/gui/actions/generate.rs
use crate::{
    gui::{ app::App, progress::GuiProgress },
    runner,
};

pub fn generate(app: &mut App) {
    let Some(doc) = &app.document else {
        app.status("Nothing to generate (no file loaded)");
        logd!("Generate: Clicked, but there's no document");
        return;
    };

    let mut prog = GuiProgress::new(app.status.clone());
    let target = app.target.hours();

    // → This is where the parse happens ←
    let report = runner::generate(&doc.text, &app.state.options.report, target, Some(&mut prog));

    let msg = if report.is_empty() {
        s!("No issue rows found")
    } else if app.target_pending() {
        format!("{} issue(s); monthly target still loading", report.rows.len())
    } else {
        format!("{} issue(s)", report.rows.len())
    };

    app.report = Some(report);
    app.generate_enabled = false;
    app.status(msg);
}
