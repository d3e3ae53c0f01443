// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use jira_report::{ config::consts::{ WINDOW_H, WINDOW_W }, gui };
use eframe::egui::ViewportBuilder;

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Jira Report Calculator")
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
