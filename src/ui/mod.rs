//! UI module for regform
//!
//! This module contains the rendering functions for the terminal form,
//! including banners, field rows and buttons.

mod banner;
mod fields;
mod render;

pub use render::draw;
