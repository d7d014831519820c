//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Quizgen: log in to a quiz backend and take role-gated quizzes.
#[derive(Debug, Parser)]
#[command(name = "quizgen", version, about)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep the session in memory only; nothing is read from or written to disk.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive session (default when no subcommand is given).
    Run {
        /// Page to open, e.g. `/select` or `/quiz?mode=trial`.
        path: Option<String>,
    },
    /// Log in with an existing account.
    Login,
    /// Create an account and log in.
    Signup,
    /// Forget the stored session.
    Logout,
    /// Show who is logged in.
    Status,
    /// Take a quiz.
    Play {
        /// Use free trial mode.
        #[arg(long)]
        trial: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Run { path: None }
    }
}
