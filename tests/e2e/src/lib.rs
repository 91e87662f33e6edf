//! Helpers for driving the portfolio in a real browser.

pub mod browser;
pub mod test_server;
