use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tracing::{debug, warn};

use crate::config::Config;
use crate::model::{FormKind, Payload, Submission};
use crate::submit::SubmitHandler;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    AccountState, ContactState, HelpState, HelpTopic, draw_account, draw_contact, draw_help,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The contact form.
    Contact,
    /// Login and signup tabs.
    Account,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    contact: ContactState,
    account: AccountState,
    help: HelpState,
    handler: Box<dyn SubmitHandler>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Contact`] screen.
    pub fn new(config: &Config, handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            screen: Screen::Contact,
            contact: ContactState::new(config.contact_feedback()),
            account: AccountState::new(config.account_feedback()),
            help: HelpState::new(),
            handler,
            tick_rate: config.tick_rate(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll for a key until the next tick → dispatch → tick timers.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key, Instant::now());
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Contact => draw_contact(&self.contact, frame, area),
            Screen::Account => draw_account(&self.account, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match key.code {
            KeyCode::F(1) => {
                match self.screen {
                    Screen::Contact => self.help.open(HelpTopic::Contact),
                    Screen::Account => self.help.open(HelpTopic::Account(self.account.tab())),
                    Screen::Help => {}
                }
                Action::Navigate(Screen::Help)
            }
            KeyCode::F(2) => Action::Navigate(Screen::Contact),
            KeyCode::F(3) => Action::Navigate(Screen::Account),
            _ => match self.screen {
                Screen::Contact => self.contact.handle_key(key),
                Screen::Account => self.account.handle_key(key),
                Screen::Help => self.help.handle_key(key),
            },
        };
        self.apply(action, now);
    }

    /// Advances every widget timer, whether or not its screen is visible.
    pub fn tick(&mut self, now: Instant) {
        self.contact.tick(now);
        self.account.tick(now);
    }

    fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if self.screen != screen {
                    debug!(from = ?self.screen, to = ?screen, "navigate");
                    self.screen = screen;
                }
            }
            Action::Submit(payload) => self.submit(payload, now),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Hands a validated payload to the handler and reports the outcome to its form.
    fn submit(&mut self, payload: Payload, now: Instant) {
        let submission = Submission::new(payload, Utc::now());
        let kind = submission.kind();
        match self.handler.submit(&submission) {
            Ok(()) => match kind {
                FormKind::Contact => self.contact.on_submitted(now),
                FormKind::Login | FormKind::Signup => self.account.on_submitted(kind, now),
            },
            Err(e) => {
                warn!(form = %kind, error = %e, "submission failed");
                match kind {
                    FormKind::Contact => self.contact.on_rejected(e.to_string()),
                    FormKind::Login | FormKind::Signup => {
                        self.account.on_rejected(kind, e.to_string());
                    }
                }
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact screen state.
    pub fn contact(&self) -> &ContactState {
        &self.contact
    }

    /// Returns the account screen state.
    pub fn account(&self) -> &AccountState {
        &self.account
    }
}
