//! Account screen with login and signup tabs, each with its own form and confirmation.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use tracing::debug;

use crate::model::{
    FormKind, LOGIN_FIELDS, LoginPayload, Payload, SIGNUP_FIELDS, SignupPayload,
};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{FormWidget, draw_banner, draw_form};

/// Confirmation shown after a login submit.
pub const LOGIN_MESSAGE: &str = "Your account is under review we will get back soon.";
/// Heading of the confirmation shown after a signup submit.
pub const SIGNUP_MESSAGE: &str = "Account created successfully!";
/// Detail line of the signup confirmation.
pub const SIGNUP_DETAIL: &str = "Your account is pending verification. We will contact you soon once the verification is complete.";

/// Which account form is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Login,
    Signup,
}

impl Tab {
    fn index(self) -> usize {
        match self {
            Self::Login => 0,
            Self::Signup => 1,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// State for the account screen.
///
/// Each tab owns an independent [`FormWidget`]; only the active form is
/// rendered and receives keys. Both keep ticking, and a visible confirmation
/// is drawn above whichever tab is selected.
#[derive(Debug, Clone)]
pub struct AccountState {
    tab: Tab,
    login: FormWidget,
    signup: FormWidget,
}

impl AccountState {
    /// Creates the screen on the login tab; confirmations last `display`.
    pub fn new(display: Duration) -> Self {
        Self {
            tab: Tab::Login,
            login: FormWidget::new(LOGIN_FIELDS, display),
            signup: FormWidget::new(SIGNUP_FIELDS, display),
        }
    }

    /// Returns the active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns the login tab's widget.
    pub fn login(&self) -> &FormWidget {
        &self.login
    }

    /// Returns the signup tab's widget.
    pub fn signup(&self) -> &FormWidget {
        &self.signup
    }

    /// Returns the widget for the active tab.
    pub fn active(&self) -> &FormWidget {
        match self.tab {
            Tab::Login => &self.login,
            Tab::Signup => &self.signup,
        }
    }

    fn active_mut(&mut self) -> &mut FormWidget {
        match self.tab {
            Tab::Login => &mut self.login,
            Tab::Signup => &mut self.signup,
        }
    }

    /// Selects a tab. Field values and pending confirmations of either tab are untouched.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!(?tab, "account tab switched");
            self.tab = tab;
        }
    }

    /// Sets a field's value on the active tab.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        self.active_mut().update_field(name, value);
    }

    /// Called by the app once the handler accepted a login or signup submission.
    ///
    /// A new account is sent to the login tab, with its confirmation above it.
    pub fn on_submitted(&mut self, kind: FormKind, now: Instant) {
        if let Some(widget) = self.widget_for(kind) {
            widget.accept(now);
        }
        if kind == FormKind::Signup {
            self.switch_tab(Tab::Login);
        }
    }

    /// Hides both confirmations.
    pub fn dismiss(&mut self) {
        self.login.dismiss();
        self.signup.dismiss();
    }

    /// Called by the app when the handler refused a login or signup submission.
    pub fn on_rejected(&mut self, kind: FormKind, message: String) {
        if let Some(widget) = self.widget_for(kind) {
            widget.reject(message);
        }
    }

    fn widget_for(&mut self, kind: FormKind) -> Option<&mut FormWidget> {
        match kind {
            FormKind::Login => Some(&mut self.login),
            FormKind::Signup => Some(&mut self.signup),
            FormKind::Contact => None,
        }
    }

    /// Validates the active form and builds its payload if it is valid.
    fn submit(&mut self) -> Action {
        let tab = self.tab;
        let widget = self.active_mut();
        if !widget.validate() {
            return Action::None;
        }
        let form = widget.form();
        let payload = match tab {
            Tab::Login => Payload::Login(LoginPayload {
                email: form.value("email").to_string(),
                password: form.value("password").to_string(),
            }),
            Tab::Signup => Payload::Signup(SignupPayload {
                name: form.value("name").to_string(),
                email: form.value("email").to_string(),
                password: form.value("password").to_string(),
            }),
        };
        Action::Submit(payload)
    }
}

impl ScreenState for AccountState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
            self.switch_tab(self.tab.other());
            return Action::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('d') {
            self.dismiss();
            return Action::None;
        }
        if self.active_mut().handle_edit_key(key) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn tick(&mut self, now: Instant) {
        self.login.tick(now);
        self.signup.tick(now);
    }
}

/// Renders the account screen.
#[mutants::skip]
pub fn draw_account(state: &AccountState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Welcome to Outseek ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let widget = state.active();
    let login_height = if state.login().feedback().is_submitted() { 4 } else { 0 };
    let signup_height = if state.signup().feedback().is_submitted() { 6 } else { 0 };
    let form_height = 3 * widget.form().fields().len() as u16;

    let [
        intro_area,
        tabs_area,
        login_banner,
        signup_banner,
        form_area,
        error_area,
        _spacer,
        footer_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(login_height),
        Constraint::Length(signup_height),
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let intro = Paragraph::new("Sign in to access resources or create a new account")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(intro, intro_area);

    let tabs = Tabs::new(vec!["Login", "Sign Up"])
        .select(state.tab().index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, tabs_area);

    if state.login().feedback().is_submitted() {
        draw_banner(LOGIN_MESSAGE, None, frame, login_banner);
    }
    if state.signup().feedback().is_submitted() {
        draw_banner(SIGNUP_MESSAGE, Some(SIGNUP_DETAIL), frame, signup_banner);
    }

    draw_form(widget.form(), frame, form_area);

    if let Some(err) = widget.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let switch_hint = match state.tab() {
        Tab::Login => "Ctrl+T: sign up",
        Tab::Signup => "Ctrl+T: sign in",
    };
    let footer = Paragraph::new(Line::from(format!(
        "Tab: next field  Ctrl+R: show/hide password  Enter: submit  {switch_hint}  Esc: quit"
    )))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
