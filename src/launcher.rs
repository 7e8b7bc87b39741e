use crate::command::{ExitOutcome, Launcher};
use crate::error::LaunchError;
use crate::tokenizer::TokenList;
use libc::c_char;
use nix::errno::Errno;
use nix::sys::signal::{SigHandler, Signal, signal};
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, fork, write};
use std::io;
use std::ptr;

/// Runs external programs with `fork` + `execvp` and waits for them.
///
/// The program named by `args[0]` is looked up through `PATH` (or used as is
/// when it contains a slash) and inherits the shell's standard streams and
/// working directory.
#[derive(Debug, Default)]
pub struct ForkExecLauncher;

impl Launcher for ForkExecLauncher {
    fn launch(&mut self, args: &TokenList) -> Result<ExitOutcome, LaunchError> {
        // The strings and the null-terminated pointer array are both built
        // here; the child must not allocate.
        let argv = args.to_argv()?;
        let mut argv_ptrs: Vec<*const c_char> = argv.iter().map(|arg| arg.as_ptr()).collect();
        argv_ptrs.push(ptr::null());

        // SAFETY: the child only calls signal(2), execvp(3), write(2) and
        // _exit(2), none of which allocate.
        match unsafe { fork() }.map_err(LaunchError::Fork)? {
            ForkResult::Child => exec_child(&argv_ptrs),
            ForkResult::Parent { child } => {
                tracing::debug!(pid = child.as_raw(), program = ?&args[0], "spawned child");
                wait_for_exit(child)
            }
        }
    }
}

/// Replace the child image, or report why that failed and end the child.
///
/// `argv` is a null-terminated array of pointers to C strings.
fn exec_child(argv: &[*const c_char]) -> ! {
    // The Rust runtime ignores SIGPIPE and an ignored disposition survives
    // exec; programs expect the default.
    // SAFETY: no handler function is installed.
    let _ = unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) };

    let errno = match argv.first() {
        Some(&program) if !program.is_null() => {
            // SAFETY: `argv` is null-terminated and its strings outlive the call.
            unsafe { libc::execvp(program, argv.as_ptr()) };
            Errno::last()
        }
        _ => Errno::ENOENT,
    };

    let stderr = io::stderr();
    for chunk in [b"lsh: ".as_slice(), errno.desc().as_bytes(), b"\n".as_slice()] {
        let _ = write(&stderr, chunk);
    }
    // SAFETY: _exit skips atexit handlers and stdio flushing, which belong to
    // the parent.
    unsafe { libc::_exit(libc::EXIT_FAILURE) }
}

/// Block until `pid` has exited or was killed by a signal.
///
/// Stop and continue notifications are not terminal and the wait is retried.
pub(crate) fn wait_for_exit(pid: Pid) -> Result<ExitOutcome, LaunchError> {
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => {
                tracing::debug!(pid = pid.as_raw(), code, "child exited");
                return Ok(ExitOutcome::Exited(code));
            }
            Ok(WaitStatus::Signaled(_, signal, core_dumped)) => {
                tracing::debug!(pid = pid.as_raw(), %signal, core_dumped, "child killed");
                return Ok(ExitOutcome::Signaled(signal as i32));
            }
            Ok(WaitStatus::Stopped(_, signal)) => {
                tracing::trace!(pid = pid.as_raw(), %signal, "child stopped, still waiting");
            }
            Ok(other) => {
                tracing::trace!(pid = pid.as_raw(), status = ?other, "non-terminal wait status");
            }
            Err(Errno::EINTR) => continue,
            Err(source) => {
                return Err(LaunchError::Wait {
                    pid: pid.as_raw(),
                    source,
                });
            }
        }
    }
}
