//! Contact screen: name, email, company, service interest and message.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{CONTACT_FIELDS, ContactPayload, Payload};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{FormWidget, draw_banner, draw_form};

/// Heading of the confirmation shown after a successful submit.
pub const THANK_YOU: &str = "Thank you for your message!";
/// Detail line of the confirmation.
pub const THANK_YOU_DETAIL: &str = "We'll get back to you within 24 hours.";

/// State for the contact screen.
#[derive(Debug, Clone)]
pub struct ContactState {
    widget: FormWidget,
}

impl ContactState {
    /// Creates an empty contact form whose confirmation lasts `display`.
    pub fn new(display: Duration) -> Self {
        Self {
            widget: FormWidget::new(CONTACT_FIELDS, display),
        }
    }

    /// Returns the underlying widget for rendering and inspection.
    pub fn widget(&self) -> &FormWidget {
        &self.widget
    }

    /// Sets a field's value by name.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.widget.update_field(name, value);
    }

    /// Called by the app once the handler accepted the submission.
    pub fn on_submitted(&mut self, now: Instant) {
        self.widget.accept(now);
    }

    /// Called by the app when the handler refused the submission.
    pub fn on_rejected(&mut self, message: String) {
        self.widget.reject(message);
    }

    /// Validates the form and builds the payload if it is valid.
    fn submit(&mut self) -> Action {
        if !self.widget.validate() {
            return Action::None;
        }
        let form = self.widget.form();
        Action::Submit(Payload::Contact(ContactPayload {
            name: form.value("name").to_string(),
            email: form.value("email").to_string(),
            company: form.optional("company"),
            service: form.optional("service"),
            message: form.value("message").to_string(),
        }))
    }
}

impl ScreenState for ContactState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // The thank-you panel replaces the form until it expires or is dismissed.
        if self.widget.feedback().is_submitted() {
            return match key.code {
                KeyCode::Esc => Action::Quit,
                KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.widget.dismiss();
                    Action::None
                }
                _ => Action::None,
            };
        }
        if self.widget.handle_edit_key(key) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn tick(&mut self, now: Instant) {
        self.widget.tick(now);
    }
}

/// Renders the contact screen.
#[mutants::skip]
pub fn draw_contact(state: &ContactState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let widget = state.widget();
    if widget.feedback().is_submitted() {
        let [banner_area, _rest] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(inner);
        draw_banner(THANK_YOU, Some(THANK_YOU_DETAIL), frame, banner_area);
        return;
    }

    let form_height = 3 * widget.form().fields().len() as u16;
    let [form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(widget.form(), frame, form_area);

    if let Some(err) = widget.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  ←/→: choose  Enter: send  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::model::ValidationError;
    use crate::tui::widgets::Feedback;

    const FIVE: Duration = Duration::from_secs(5);

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut ContactState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    /// Fills name, email and message via the keyboard, leaving optionals empty.
    fn fill_minimal(state: &mut ContactState) {
        type_string(state, "Jane");
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "jane@x.com");
        state.handle_key(press(KeyCode::Tab));
        state.handle_key(press(KeyCode::Tab));
        state.handle_key(press(KeyCode::Tab));
        type_string(state, "Hi");
    }

    mod invalid_submit {
        use super::*;

        #[test]
        fn empty_submit_marks_required_fields() {
            let mut state = ContactState::new(FIVE);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            let form = state.widget().form();
            assert_eq!(
                form.error("name"),
                Some(ValidationError::Missing("Name is required"))
            );
            assert_eq!(
                form.error("email"),
                Some(ValidationError::Missing("Email is required"))
            );
            assert_eq!(
                form.error("message"),
                Some(ValidationError::Missing("Message is required"))
            );
            assert!(form.error("company").is_none());
            assert!(form.error("service").is_none());
        }

        #[test]
        fn bad_email_blocks_submit() {
            let mut state = ContactState::new(FIVE);
            state.update_field("name", "Jane");
            state.update_field("email", "jane@x");
            state.update_field("message", "Hi");
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
            assert_eq!(
                state.widget().form().error("email"),
                Some(ValidationError::PatternMismatch("Invalid email address"))
            );
            assert_eq!(state.widget().feedback(), Feedback::Idle);
        }

        #[test]
        fn errors_cleared_on_valid_resubmit() {
            let mut state = ContactState::new(FIVE);
            state.handle_key(press(KeyCode::Enter));
            assert!(state.widget().form().has_errors());
            fill_minimal(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::Submit(_)));
            assert!(!state.widget().form().has_errors());
        }
    }

    mod valid_submit {
        use super::*;

        #[test]
        fn minimal_payload_has_no_optionals() {
            let mut state = ContactState::new(FIVE);
            fill_minimal(&mut state);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(
                action,
                Action::Submit(Payload::Contact(ContactPayload {
                    name: "Jane".into(),
                    email: "jane@x.com".into(),
                    company: None,
                    service: None,
                    message: "Hi".into(),
                }))
            );
        }

        #[test]
        fn optional_fields_are_carried() {
            let mut state = ContactState::new(FIVE);
            type_string(&mut state, "Jane");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "jane@x.com");
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "Acme");
            state.handle_key(press(KeyCode::Tab));
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Tab));
            type_string(&mut state, "Hi");
            match state.handle_key(press(KeyCode::Enter)) {
                Action::Submit(Payload::Contact(payload)) => {
                    assert_eq!(payload.company.as_deref(), Some("Acme"));
                    assert_eq!(payload.service.as_deref(), Some("cloud"));
                }
                other => panic!("expected contact submit, got {other:?}"),
            }
        }

        #[test]
        fn fields_kept_until_handler_accepts() {
            let mut state = ContactState::new(FIVE);
            fill_minimal(&mut state);
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.widget().form().value("name"), "Jane");
        }
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn accepted_submit_clears_fields_and_shows_success() {
            let now = Instant::now();
            let mut state = ContactState::new(FIVE);
            fill_minimal(&mut state);
            state.handle_key(press(KeyCode::Enter));
            state.on_submitted(now);
            let form = state.widget().form();
            assert!(form.fields().iter().all(|f| f.value.is_empty()));
            assert!(state.widget().feedback().is_submitted());
        }

        #[test]
        fn success_reverts_after_five_seconds() {
            let now = Instant::now();
            let mut state = ContactState::new(FIVE);
            state.on_submitted(now);
            state.tick(now + Duration::from_millis(4_900));
            assert!(state.widget().feedback().is_submitted());
            state.tick(now + FIVE);
            assert_eq!(state.widget().feedback(), Feedback::Idle);
        }

        #[test]
        fn enter_while_submitted_does_not_resubmit() {
            let now = Instant::now();
            let mut state = ContactState::new(FIVE);
            state.on_submitted(now);
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
            assert!(state.widget().feedback().is_submitted());
        }

        #[test]
        fn typing_while_submitted_is_ignored() {
            let mut state = ContactState::new(FIVE);
            state.on_submitted(Instant::now());
            type_string(&mut state, "abc");
            assert_eq!(state.widget().form().value("name"), "");
        }

        #[test]
        fn ctrl_d_dismisses_thank_you() {
            let mut state = ContactState::new(FIVE);
            state.on_submitted(Instant::now());
            state.handle_key(ctrl('d'));
            assert_eq!(state.widget().feedback(), Feedback::Idle);
        }

        #[test]
        fn rejection_shows_general_error_and_keeps_values() {
            let mut state = ContactState::new(FIVE);
            fill_minimal(&mut state);
            state.handle_key(press(KeyCode::Enter));
            state.on_rejected("submission rejected: offline".into());
            assert_eq!(
                state.widget().general_error(),
                Some("submission rejected: offline")
            );
            assert_eq!(state.widget().form().value("message"), "Hi");
        }

        #[test]
        fn esc_quits() {
            let mut state = ContactState::new(FIVE);
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_contact(state: &ContactState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_contact(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_and_fields() {
            let state = ContactState::new(FIVE);
            let output = render_contact(&state, 80, 22);
            assert!(output.contains("Contact Us"));
            assert!(output.contains("Name *"));
            assert!(output.contains("Service Interest"));
            assert!(output.contains("Select a service"));
        }

        #[test]
        fn renders_inline_errors() {
            let mut state = ContactState::new(FIVE);
            state.handle_key(press(KeyCode::Enter));
            let output = render_contact(&state, 80, 22);
            assert!(output.contains("Name is required"));
            assert!(output.contains("Message is required"));
        }

        #[test]
        fn renders_thank_you_instead_of_form() {
            let mut state = ContactState::new(FIVE);
            state.on_submitted(Instant::now());
            let output = render_contact(&state, 80, 22);
            assert!(output.contains(THANK_YOU));
            assert!(!output.contains("Name *"));
        }

        #[test]
        fn renders_general_error() {
            let mut state = ContactState::new(FIVE);
            state.on_rejected("submission rejected: offline".into());
            let output = render_contact(&state, 80, 22);
            assert!(output.contains("submission rejected: offline"));
        }
    }
}
