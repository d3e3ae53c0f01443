// src/gui/components/data_table.rs
//
// Draws the issue table for the current report. Purely a view.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::report::{ table, Report };

const LINK_COL: usize = 1;
const SUMMARY_COL: usize = 2;

fn initial_width(header: &str, col: usize) -> f32 {
    match col {
        0 => 150.0,
        LINK_COL => 110.0,
        SUMMARY_COL => 360.0,
        _ if header == "Status" => 110.0,
        _ => 90.0,
    }
}

pub fn draw(ui: &mut egui::Ui, report: &Report) {
    let headers = table::headers(report.variant);
    let rows = table::rows(report);

    // numbers sit right-aligned, like a spreadsheet
    let numeric: Vec<bool> = headers
        .iter()
        .map(|h| h.ends_with("(hours)") || h.ends_with("(%)"))
        .collect();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .id_salt(("issue_table", report.variant));
    for (ci, h) in headers.iter().enumerate() {
        builder = builder.column(Column::initial(initial_width(h, ci)).clip(true).at_least(40.0));
    }

    builder
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(*h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let ri = row.index();
                let Some(cells) = rows.get(ri) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        if ci == LINK_COL && !cell.is_empty() {
                            let key = cell.rsplit('/').next().unwrap_or(cell);
                            ui.hyperlink_to(key, cell).on_hover_text(cell.as_str());
                        } else if numeric.get(ci).copied().unwrap_or(false) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell.as_str());
                            });
                        } else {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.label(cell.as_str()).on_hover_text(cell.as_str());
                        }
                    });
                }
            });
        });
}
