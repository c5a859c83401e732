//! Terminal cookie consent dialog.
//!
//! Offers a set of cookie categories, lets the visitor accept all of them or
//! pick individually, and hands the decision to a [`storage::ConsentStore`].

pub mod config;
pub mod consent;
pub mod logging;
pub mod storage;
pub mod ui;
