// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{ mpsc, Arc, Mutex },
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{ options::TargetOptions, state::AppState },
    report::Report,
    target,
};

use super::{ actions, components };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Jira Report Calculator",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

/// The export currently loaded; replaced wholesale by the next load.
pub struct LoadedDoc {
    pub path: PathBuf,
    pub text: String,
}

/// Monthly target for this session. Fetched once, off the UI thread.
pub enum TargetState {
    Pending(mpsc::Receiver<Option<f64>>),
    Ready(Option<f64>),
}

impl TargetState {
    pub fn hours(&self) -> Option<f64> {
        match self {
            TargetState::Pending(_) => None,
            TargetState::Ready(t) => *t,
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub document: Option<LoadedDoc>,

    /// Current snapshot; every generate replaces it.
    pub report: Option<Report>,
    pub generate_enabled: bool,

    pub target: TargetState,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let target = if state.options.target.url.is_some() {
            TargetState::Pending(spawn_target_fetch(state.options.target.clone()))
        } else {
            logd!("Init: no target feed configured");
            TargetState::Ready(None)
        };

        logf!("Init: variant={:?}", state.options.report.variant);

        Self {
            state,
            document: None,
            report: None,
            generate_enabled: false,
            target,
            status: Arc::new(Mutex::new(s!("Choose a Jira HTML file"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn target_pending(&self) -> bool {
        matches!(self.target, TargetState::Pending(_))
    }

    /// Options changed: allow another generate if there is something to parse.
    pub fn options_changed(&mut self) {
        self.generate_enabled = self.document.is_some();
    }

    /// Pick up the background target result, if it has arrived.
    fn poll_target(&mut self, ctx: &egui::Context) {
        let TargetState::Pending(rx) = &self.target else { return };
        match rx.try_recv() {
            Ok(hours) => {
                logf!("Target: ready {:?}", hours);
                self.target_ready(hours);
            }
            Err(mpsc::TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(250));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Target: fetch thread ended without a result");
                self.target_ready(Some(0.0));
            }
        }
    }

    /// Settle the session target and re-compare any report already on screen.
    fn target_ready(&mut self, hours: Option<f64>) {
        self.target = TargetState::Ready(hours);
        if let Some(r) = self.report.take() {
            self.report = Some(r.with_target(hours));
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
            logd!("UI: file dropped → {}", path.display());
            actions::load(self, path);
        }
    }
}

fn spawn_target_fetch(opts: TargetOptions) -> mpsc::Receiver<Option<f64>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(target::target_hours(&opts));
    });
    rx
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_target(ctx);
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            ui.add_space(6.0);
            components::input_bar::draw(ui, self);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            components::action_buttons::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.report {
                Some(report) if !report.is_empty() => {
                    components::totals_panel::draw(ui, report);
                    ui.separator();
                    components::data_table::draw(ui, report);
                }
                Some(_) => {
                    ui.label("No issue rows found in this file.");
                }
                None => {
                    ui.label("Export your filtered JIRA issues to HTML, then load the file here (or drop it on the window).");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ReportVariant;
    use crate::report;

    fn app_with_report() -> App {
        let mut app = App::new(AppState::default());
        app.report = Some(report::build(Vec::new(), ReportVariant::StoryPoints, None));
        app
    }

    #[test]
    fn arriving_target_updates_shown_report() {
        let mut app = app_with_report();
        let (tx, rx) = mpsc::channel();
        app.target = TargetState::Pending(rx);
        tx.send(Some(40.0)).unwrap();

        app.poll_target(&egui::Context::default());
        assert_eq!(app.target.hours(), Some(40.0));
        let totals = &app.report.as_ref().unwrap().totals;
        assert_eq!(totals.target, Some(40.0));
        assert_eq!(totals.needed_hours, Some(0.0));
    }

    #[test]
    fn lost_fetch_thread_applies_zero_target() {
        let mut app = app_with_report();
        let (tx, rx) = mpsc::channel::<Option<f64>>();
        app.target = TargetState::Pending(rx);
        drop(tx);

        app.poll_target(&egui::Context::default());
        assert!(!app.target_pending());
        let totals = &app.report.as_ref().unwrap().totals;
        assert_eq!(totals.target, Some(0.0));
        assert_eq!(totals.needed_hours, Some(0.0));
    }
}
