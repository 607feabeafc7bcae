//! TUI screen implementations.

pub mod account;
pub mod contact;
pub mod help;

pub use account::{AccountState, Tab, draw_account};
pub use contact::{ContactState, draw_contact};
pub use help::{HelpState, HelpTopic, draw_help};
