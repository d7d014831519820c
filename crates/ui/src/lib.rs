//! Quizgen UI - Terminal user interface
//!
//! This crate renders the login, selection and quiz pages as text over a
//! [`Terminal`], and routes between them with a session guard.

pub mod context;
pub mod error;
pub mod pages;
pub mod router;
pub mod terminal;

pub use context::UiContext;
pub use error::{UiError, UiResult};
pub use router::{Route, Router};
pub use terminal::{ScriptedTerminal, StdTerminal, Terminal};
