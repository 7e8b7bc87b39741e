use crate::command::Status;
use crate::error::BuiltinError;
use crate::tokenizer::TokenList;
use std::env;
use std::ffi::OsStr;
use std::io::Write;
use std::path::PathBuf;

/// Commands implemented directly by the shell.
///
/// A builtin runs in-process, never spawns a child and never blocks. It gets
/// the whole token list, with `args[0]` being its own name.
pub trait BuiltinCommand {
    /// Name the command is dispatched by, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Executes the command. `table` is the registry the command was found in.
    fn execute(
        &self,
        args: &TokenList,
        stdout: &mut dyn Write,
        table: &BuiltinTable,
    ) -> Result<Status, BuiltinError>;
}

/// Immutable registry of builtins, built once and owned by the interpreter.
pub struct BuiltinTable {
    commands: Vec<Box<dyn BuiltinCommand>>,
}

impl BuiltinTable {
    pub fn new(commands: Vec<Box<dyn BuiltinCommand>>) -> Self {
        Self { commands }
    }

    /// Find a builtin by name.
    pub fn lookup(&self, name: &OsStr) -> Option<&dyn BuiltinCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| cmd.as_ref())
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|cmd| cmd.name())
    }

    /// Run `builtin`, reporting its error (if any) on `stderr`.
    ///
    /// A failing builtin never stops the shell.
    pub fn invoke(
        &self,
        builtin: &dyn BuiltinCommand,
        args: &TokenList,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Status {
        match builtin.execute(args, stdout, self) {
            Ok(status) => status,
            Err(e) => {
                tracing::debug!(builtin = builtin.name(), error = %e, "builtin failed");
                if let Err(write_err) = writeln!(stderr, "lsh: {e}") {
                    tracing::trace!(error = %write_err, "could not report builtin error");
                }
                Status::Continue
            }
        }
    }
}

impl Default for BuiltinTable {
    /// The standard builtins: `cd`, `help` and `exit`.
    fn default() -> Self {
        Self::new(vec![Box::new(Cd), Box::new(Help), Box::new(Exit)])
    }
}

/// Change the working directory of the shell process.
pub struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        args: &TokenList,
        _stdout: &mut dyn Write,
        _table: &BuiltinTable,
    ) -> Result<Status, BuiltinError> {
        let target = args
            .get(1)
            .ok_or(BuiltinError::MissingArgument(self.name()))?;

        env::set_current_dir(target).map_err(|source| BuiltinError::ChangeDir {
            path: PathBuf::from(target),
            source,
        })?;
        tracing::debug!(dir = ?target, "changed directory");
        Ok(Status::Continue)
    }
}

/// Print usage and the list of builtins.
pub struct Help;

impl BuiltinCommand for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(
        &self,
        _args: &TokenList,
        stdout: &mut dyn Write,
        table: &BuiltinTable,
    ) -> Result<Status, BuiltinError> {
        writeln!(stdout, "LSH")?;
        writeln!(stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(stdout, "The following are built in:")?;
        for name in table.names() {
            writeln!(stdout, "  {name}")?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Status::Continue)
    }
}

/// Leave the shell. Arguments are ignored.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        _args: &TokenList,
        _stdout: &mut dyn Write,
        _table: &BuiltinTable,
    ) -> Result<Status, BuiltinError> {
        Ok(Status::Terminate)
    }
}
