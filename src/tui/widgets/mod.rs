//! Reusable TUI widgets.

pub mod feedback;
pub mod form;
pub mod form_widget;

pub use feedback::{Feedback, draw_banner};
pub use form::{Form, FormField, draw_form};
pub use form_widget::FormWidget;
