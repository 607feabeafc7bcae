//! Key reference for every form, with the one the user came from listed first.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::account::Tab;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("F1", "this help"),
    ("F2", "contact form"),
    ("F3", "login / sign up"),
    ("Ctrl+C", "quit from anywhere"),
];

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / previous field"),
    ("Backspace", "delete last character"),
    ("Ctrl+D", "dismiss confirmation"),
    ("Esc", "quit"),
];

const CONTACT_KEYS: &[(&str, &str)] = &[
    ("\u{2190} / \u{2192}", "change service interest"),
    ("Enter", "send message"),
];

const ACCOUNT_KEYS: &[(&str, &str)] = &[
    ("Ctrl+T", "switch between login and sign up"),
    ("Ctrl+R", "show / hide focused password"),
    ("Enter", "sign in / create account"),
];

/// Which form the help screen was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Contact,
    /// The account screen, with the tab that was selected.
    Account(Tab),
}

impl HelpTopic {
    /// The screen to return to.
    pub fn screen(self) -> Screen {
        match self {
            Self::Contact => Screen::Contact,
            Self::Account(_) => Screen::Account,
        }
    }
}

/// One titled group of bindings.
struct Section {
    title: &'static str,
    current: bool,
    keys: &'static [(&'static str, &'static str)],
}

fn sections(topic: HelpTopic) -> Vec<Section> {
    let contact = Section {
        title: "Contact form",
        current: topic == HelpTopic::Contact,
        keys: CONTACT_KEYS,
    };
    let account = Section {
        title: match topic {
            HelpTopic::Account(Tab::Login) => "Account (Login tab open)",
            HelpTopic::Account(Tab::Signup) => "Account (Sign Up tab open)",
            HelpTopic::Contact => "Account",
        },
        current: matches!(topic, HelpTopic::Account(_)),
        keys: ACCOUNT_KEYS,
    };
    let (first, second) = match topic {
        HelpTopic::Contact => (contact, account),
        HelpTopic::Account(_) => (account, contact),
    };
    vec![
        first,
        second,
        Section {
            title: "Every form",
            current: false,
            keys: FORM_KEYS,
        },
        Section {
            title: "Global",
            current: false,
            keys: GLOBAL_KEYS,
        },
    ]
}

fn rows(topic: HelpTopic) -> Vec<Row<'static>> {
    let key_style = Style::default().fg(Color::Yellow);
    let mut rows = Vec::new();
    for section in sections(topic) {
        let (marker, style) = if section.current {
            (
                "\u{25b8} ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::Cyan))
        };
        let heading = Cell::from(format!("{marker}{}", section.title));
        rows.push(Row::new(vec![heading]).style(style));
        for &(key, action) in section.keys {
            rows.push(Row::new(vec![
                Cell::from(format!("    {key}")).style(key_style),
                Cell::from(action),
            ]));
        }
        rows.push(Row::new(vec![Cell::from("")]));
    }
    rows
}

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    topic: HelpTopic,
    offset: usize,
    len: usize,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates help for the contact form, scrolled to the top.
    pub fn new() -> Self {
        Self::for_topic(HelpTopic::Contact)
    }

    fn for_topic(topic: HelpTopic) -> Self {
        Self {
            topic,
            offset: 0,
            len: rows(topic).len(),
        }
    }

    /// Re-targets the screen at `topic` and scrolls back to the top.
    pub fn open(&mut self, topic: HelpTopic) {
        *self = Self::for_topic(topic);
    }

    /// Returns the form help was opened from.
    pub fn topic(&self) -> HelpTopic {
        self.topic
    }

    /// Index of the first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn scroll_by(&mut self, delta: isize) {
        let last = self.len.saturating_sub(1);
        self.offset = self.offset.saturating_add_signed(delta).min(last);
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::Home => self.offset = 0,
            KeyCode::Char('q') | KeyCode::Esc => return Action::Navigate(self.topic.screen()),
            _ => {}
        }
        Action::None
    }
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let visible: Vec<Row> = rows(state.topic()).into_iter().skip(state.offset()).collect();
    let table = Table::new(visible, [Constraint::Length(32), Constraint::Min(10)]);
    frame.render_widget(table, table_area);

    let footer = Paragraph::new(Line::from(
        "\u{2191}/\u{2193} PgUp/PgDn Home: scroll  q/Esc: back",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
