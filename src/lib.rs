// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod errors;
pub mod specs;

pub mod classify;
pub mod data;
pub mod file;
pub mod harvest;
pub mod normalize;
pub mod progress;
pub mod records;
pub mod runner;
pub mod store;

pub mod cli;
pub mod gui;
