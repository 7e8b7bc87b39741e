use crate::error::LaunchError;
use crate::tokenizer::TokenList;

/// Decision produced by every dispatched command.
///
/// The dispatch loop reads another line on [`Status::Continue`] and returns
/// on [`Status::Terminate`]. Nothing else crosses the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Terminate,
}

/// Terminal result of one launched program.
///
/// A stopped child never produces an outcome: launchers keep waiting until the
/// child has exited or was killed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The program exited normally with the given status code.
    Exited(i32),
    /// The program was terminated by an uncaught signal (the signal number).
    Signaled(i32),
}

/// Capability that runs an external program to completion.
///
/// The shell ships [`ForkExecLauncher`](crate::ForkExecLauncher). Tests plug in
/// launchers that return canned outcomes without creating any process.
pub trait Launcher {
    /// Run `args[0]` with `args` as its argument vector and block until it has
    /// exited or was terminated by a signal.
    ///
    /// `args` is never empty when called by the [`Interpreter`](crate::Interpreter).
    fn launch(&mut self, args: &TokenList) -> Result<ExitOutcome, LaunchError>;
}
