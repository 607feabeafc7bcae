//! Reusable form widget driven by a static rule table.

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FieldKind, FieldSpec, ValidationError, validate_form};

/// Character drawn for each character of a masked secret.
const MASK: char = '\u{2022}';

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Static description: name, label, kind and rules.
    pub spec: &'static FieldSpec,
    /// Current text value.
    pub value: String,
    /// Validation error from the last submit, if any.
    pub error: Option<ValidationError>,
    /// Whether a secret field is currently shown in plain text.
    pub revealed: bool,
}

impl FormField {
    /// Creates an empty field for `spec`.
    pub fn new(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
            revealed: false,
        }
    }

    /// Returns `true` if the rendered value is masked.
    pub fn is_masked(&self) -> bool {
        self.spec.kind == FieldKind::Secret && !self.revealed
    }

    /// Returns the text to render for this field; never alters the stored value.
    pub fn display_value(&self) -> Cow<'_, str> {
        match self.spec.kind {
            FieldKind::Secret if !self.revealed => {
                Cow::Owned(std::iter::repeat_n(MASK, self.value.chars().count()).collect())
            }
            FieldKind::Choice(options) => options
                .iter()
                .find(|o| o.value == self.value)
                .map(|o| Cow::Borrowed(o.label))
                .unwrap_or(Cow::Borrowed(self.value.as_str())),
            _ => Cow::Borrowed(self.value.as_str()),
        }
    }
}

/// A multi-field form with focus management and per-field errors.
#[derive(Debug, Clone)]
pub struct Form {
    specs: &'static [FieldSpec],
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates an empty form for the given rule table. Focus starts on the first field.
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        Self {
            specs,
            fields: specs.iter().map(FormField::new).collect(),
            focus: 0,
        }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the focused field, if the form has any fields.
    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Inserts a character at the end of the focused field.
    ///
    /// Choice fields do not take typed input.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && !matches!(field.spec.kind, FieldKind::Choice(_))
        {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && !matches!(field.spec.kind, FieldKind::Choice(_))
        {
            field.value.pop();
        }
    }

    /// Steps the focused choice field to the next or previous option, wrapping around.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return;
        };
        let FieldKind::Choice(options) = field.spec.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let len = options.len();
        let next = match options.iter().position(|o| o.value == field.value) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        field.value = options[next].value.to_string();
    }

    /// Flips masked/plain rendering of the focused secret field.
    pub fn toggle_reveal(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && field.spec.kind == FieldKind::Secret
        {
            field.revealed = !field.revealed;
        }
    }

    /// Sets a field's value by name. Unknown names are ignored; no validation runs.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
        }
    }

    /// Returns the value of the named field, or an empty string if unknown.
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Returns the value of the named field as owned text, or `None` if empty.
    pub fn optional(&self, name: &str) -> Option<String> {
        let value = self.value(name);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Returns the error currently shown on the named field.
    pub fn error(&self, name: &str) -> Option<ValidationError> {
        self.field(name).and_then(|f| f.error)
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Recomputes every field's error from the rule table.
    ///
    /// Returns `true` if the form is valid.
    pub fn validate(&mut self) -> bool {
        let fields = &self.fields;
        let errors = validate_form(self.specs, |name| {
            fields
                .iter()
                .find(|f| f.spec.name == name)
                .map(|f| f.value.as_str())
                .unwrap_or("")
        });
        for field in &mut self.fields {
            field.error = errors
                .iter()
                .find(|(name, _)| *name == field.spec.name)
                .map(|(_, e)| *e);
        }
        errors.is_empty()
    }

    /// Resets all values, errors, reveal flags and focus.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
            field.revealed = false;
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.spec.name == name)
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let mut title = field.spec.label.to_string();
        if field.spec.is_required() {
            title.push_str(" *");
        }
        match field.spec.kind {
            FieldKind::Secret if field.revealed => title.push_str(" (shown)"),
            FieldKind::Secret => title.push_str(" (hidden)"),
            _ => {}
        }

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = Vec::new();
        if let FieldKind::Choice(_) = field.spec.kind {
            spans.push(Span::raw("< "));
            spans.push(Span::raw(field.display_value()));
            spans.push(Span::raw(" >"));
        } else {
            spans.push(Span::raw(field.display_value()));
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        if let Some(err) = field.error {
            let error_line = Paragraph::new(Span::styled(
                err.message(),
                Style::default().fg(Color::Red),
            ));
            // Overlaps the bottom border of the row.
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
