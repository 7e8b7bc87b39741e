use crate::builtin::BuiltinTable;
use crate::command::{Launcher, Status};
use crate::error::ShellError;
use crate::launcher::ForkExecLauncher;
use crate::reader::{Line, LineReader};
use crate::tokenizer::{TokenList, split_line};
use std::io::{self, Read, Write};

/// Prompt printed before every line when none is configured.
pub const DEFAULT_PROMPT: &str = "> ";

/// The read-split-dispatch loop.
///
/// Owns the builtin registry and the launcher used for everything that is not
/// a builtin.
///
/// Example
/// ```
/// use lsh::{Interpreter, LineReader};
/// let mut sh = Interpreter::default();
/// let mut input = LineReader::new("help\nexit\n".as_bytes());
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// sh.run(&mut input, &mut out, &mut err).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("  exit"));
/// ```
pub struct Interpreter {
    builtins: BuiltinTable,
    launcher: Box<dyn Launcher>,
    prompt: String,
}

impl Interpreter {
    pub fn new(builtins: BuiltinTable, launcher: Box<dyn Launcher>) -> Self {
        Self {
            builtins,
            launcher,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Dispatch one token list: nothing for an empty list, the builtin for a
    /// known name, the launcher otherwise.
    ///
    /// Errors are reported on `stderr` and never stop the shell; only the
    /// `exit` builtin yields [`Status::Terminate`].
    pub fn execute(
        &mut self,
        args: &TokenList,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Status {
        let Some(name) = args.command() else {
            return Status::Continue;
        };

        if let Some(builtin) = self.builtins.lookup(name) {
            tracing::debug!(builtin = ?name, argc = args.len(), "running builtin");
            return self.builtins.invoke(builtin, args, stdout, stderr);
        }

        // The child shares our stdout; pending output must not be duplicated.
        if let Err(e) = stdout.flush() {
            tracing::trace!(error = %e, "could not flush stdout before launch");
        }
        match self.launcher.launch(args) {
            Ok(outcome) => tracing::debug!(program = ?name, ?outcome, "program finished"),
            Err(e) => {
                tracing::warn!(program = ?name, error = %e, "launch failed");
                if let Err(write_err) = writeln!(stderr, "lsh: {e}") {
                    tracing::trace!(error = %write_err, "could not report launch error");
                }
            }
        }
        Status::Continue
    }

    /// Prompt, read, split and dispatch until `exit` or end of input.
    ///
    /// Returns an error only for fatal conditions (allocation failure, broken
    /// input stream).
    pub fn run<R: Read>(
        &mut self,
        input: &mut LineReader<R>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            write!(stdout, "{}", self.prompt)?;
            stdout.flush()?;
            stderr.flush()?;

            let line = match input.read_line()? {
                Line::Text(line) => line,
                Line::Eof => {
                    tracing::debug!("end of input");
                    return Ok(());
                }
            };
            let args = split_line(&line)?;

            if self.execute(&args, stdout, stderr) == Status::Terminate {
                tracing::debug!("exit requested");
                return Ok(());
            }
        }
    }

    /// Run the loop on the process's standard streams.
    pub fn repl(&mut self) -> Result<(), ShellError> {
        let mut input = LineReader::new(io::stdin().lock());
        self.run(&mut input, &mut io::stdout(), &mut io::stderr())
    }
}

impl Default for Interpreter {
    /// Standard builtins and the fork/exec launcher.
    fn default() -> Self {
        Self::new(BuiltinTable::default(), Box::new(ForkExecLauncher))
    }
}
