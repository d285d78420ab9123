//! Vistas HTML

pub mod form_page;

pub use form_page::{render_form_page, FormPage};
