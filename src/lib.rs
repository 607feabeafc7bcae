#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal contact and account forms with validation and timed confirmations.

pub mod config;
pub mod logging;
pub mod model;
pub mod submit;
pub mod tui;
