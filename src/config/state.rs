// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Contents of the input path field
    pub input_path_text: String,

    /// Contents of the export path field
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Defaults plus environment overrides; what both frontends start from.
    pub fn from_env() -> Self {
        let mut state = Self::default();
        state.options.target = crate::config::options::TargetOptions::from_env();
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        state
    }
}
