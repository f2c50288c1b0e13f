// src/config/state.rs
use std::path::PathBuf;

use super::consts::{WINDOW_H, WINDOW_W};
use crate::data::Filters;

#[derive(Clone, Debug)]
pub struct ViewerState {
    /// Directory scanned for the newest full-record file
    pub data_dir: PathBuf,

    /// Sidebar selections
    pub filters: Filters,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            filters: Filters::default(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}
