//! Form rendering module
//!
//! - `field_renderer`: single field with its inline error or help text
//! - `form_view`: section grid, submit button and submission error

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
