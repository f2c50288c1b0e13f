// src/gui/components/mod.rs
pub mod action_buttons;
pub mod data_table;
pub mod filter_panel;
pub mod metrics;
