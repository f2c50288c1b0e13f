// src/gui/actions/mod.rs
//
// Button handlers. Each one mutates App and leaves a status line behind.

mod copy;
mod refresh;

pub use copy::copy;
pub use refresh::refresh;
