//! A form plus its submission lifecycle: inline errors, confirmation timer.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::feedback::Feedback;
use super::form::Form;
use crate::model::FieldSpec;

/// Self-contained interactive form: field values, validation errors, a
/// form-level error from the submit handler, and the confirmation display.
#[derive(Debug, Clone)]
pub struct FormWidget {
    form: Form,
    feedback: Feedback,
    general_error: Option<String>,
    display: Duration,
}

impl FormWidget {
    /// Creates an empty widget whose confirmation stays visible for `display`.
    pub fn new(specs: &'static [FieldSpec], display: Duration) -> Self {
        Self {
            form: Form::new(specs),
            feedback: Feedback::Idle,
            general_error: None,
            display,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the current confirmation state.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Returns the form-level error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// How long the confirmation stays visible after a successful submit.
    pub fn display(&self) -> Duration {
        self.display
    }

    /// Sets a field's current value. No validation runs until the next submit.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set_value(name, value);
    }

    /// Applies an editing key to the form.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => {
                    self.form.toggle_reveal();
                    true
                }
                KeyCode::Char('d') => {
                    self.dismiss();
                    true
                }
                _ => false,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Right => self.form.cycle_choice(true),
            KeyCode::Left => self.form.cycle_choice(false),
            KeyCode::Char(ch) => self.form.insert_char(ch),
            _ => return false,
        }
        true
    }

    /// Recomputes field errors and clears any previous handler error.
    ///
    /// Returns `true` if the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.general_error = None;
        let valid = self.form.validate();
        if !valid {
            let invalid = self.form.fields().iter().filter(|f| f.error.is_some()).count();
            debug!(invalid, "submit blocked by validation");
        }
        valid
    }

    /// Records a successful submit: clears the fields and shows the confirmation.
    pub fn accept(&mut self, now: Instant) {
        self.form.reset();
        self.general_error = None;
        self.feedback.show(now, self.display);
    }

    /// Records a failed submit; field values are kept for a retry.
    pub fn reject(&mut self, message: String) {
        self.general_error = Some(message);
    }

    /// Advances the confirmation timer. Returns `true` if it just expired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.feedback.tick(now);
        if expired {
            debug!("confirmation expired");
        }
        expired
    }

    /// Hides the confirmation before its timeout.
    pub fn dismiss(&mut self) {
        self.feedback.dismiss();
    }

    /// Returns the widget to its initial state, cancelling any pending confirmation.
    pub fn reset(&mut self) {
        self.form.reset();
        self.feedback = Feedback::Idle;
        self.general_error = None;
    }
}
