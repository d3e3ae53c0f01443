// src/gui/components/mod.rs
pub mod action_buttons;
pub mod data_table;
pub mod input_bar;
pub mod totals_panel;
