//! Library components of the question bank viewer CLI.

pub mod config;
pub mod logging;
pub mod present;
pub mod session;
