// src/gui/actions/export.rs
use crate::{ file, gui::app::App };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.state.gui.out_path_dirty = false;
    }

    let status_msg = match &app.report {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(report) => match file::write_export(&app.state.options.export, report) {
            Ok(path) => {
                logf!("Export: OK rows={} → {}", report.rows.len(), path.display());
                format!("Exported to {}", path.display())
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        },
    };

    // mutate app only after the report borrow is gone
    app.status(status_msg);
}
