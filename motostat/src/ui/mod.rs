//! UI module root: drawing functions for the header and the indicator panel.

pub mod header;
pub mod panel;
pub mod text;
pub mod theme;
