//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, TIMER_RESET, run_tui};
