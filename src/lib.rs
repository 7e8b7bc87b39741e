//! A minimal interactive shell.
//!
//! The shell reads a line, splits it on whitespace and either runs one of its
//! builtins (`cd`, `help`, `exit`) or launches an external program, blocking
//! until that program has exited or was killed. There is no quoting, no
//! pipelines, no redirection and no job control.
//!
//! The main entry point is [`Interpreter`]. External programs go through the
//! [`Launcher`] trait so the dispatch loop can be driven without creating
//! processes.

mod builtin;
mod command;
pub mod config;
mod error;
mod interpreter;
mod launcher;
pub mod logging;
pub mod net;
mod reader;
mod tokenizer;

pub use builtin::{BuiltinCommand, BuiltinTable, Cd, Exit, Help};
pub use command::{ExitOutcome, Launcher, Status};
pub use error::{BuiltinError, LaunchError, ShellError};
pub use interpreter::{DEFAULT_PROMPT, Interpreter};
pub use launcher::ForkExecLauncher;
pub use reader::{Line, LineReader, READ_BUFSIZE};
pub use tokenizer::{DELIMITERS, TOKEN_BUFSIZE, TokenList, split_line};
