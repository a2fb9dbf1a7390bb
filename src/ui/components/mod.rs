//! Reusable UI components

mod dialog;

pub use dialog::{draw_loading, draw_modal};
