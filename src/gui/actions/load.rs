// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{
    file,
    gui::app::{ App, LoadedDoc },
};

/// Read the export at `path` and generate a fresh report from it.
/// A failed load keeps the previous document and report.
pub fn load(app: &mut App, path: PathBuf) {
    if path.as_os_str().is_empty() {
        app.status("Choose a Jira HTML file first");
        return;
    }
    if !file::is_html_path(&path) {
        logd!("Load: not an .html file → {}", path.display());
    }

    match file::read_document(&path) {
        Ok(text) => {
            logf!("Load: OK {} ({} bytes)", path.display(), text.len());
            app.state.gui.input_path_text = path.to_string_lossy().into_owned();
            app.document = Some(LoadedDoc { path, text });
            super::generate(app);
        }
        Err(e) => {
            loge!("Load: Error {}: {}", path.display(), e);
            app.status(format!("Load error: {e}"));
        }
    }
}
