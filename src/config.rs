//! Command-line options of the `lsh` binary.

use crate::interpreter::DEFAULT_PROMPT;
use argh::{EarlyExit, FromArgs};
use std::net::SocketAddrV4;
use std::time::Duration;

/// Default connect and send timeout for `--connect`, in seconds.
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 8;

#[derive(FromArgs, Debug)]
/// LSH: type program names and arguments, and hit enter.
struct Cli {
    #[argh(option, short = 'c')]
    /// connect to an IPv4 server (ADDR:PORT) and run the shell over that connection
    connect: Option<SocketAddrV4>,

    #[argh(option, default = "DEFAULT_SEND_TIMEOUT_SECS")]
    /// connect and send timeout in seconds for --connect; 0 disables it
    send_timeout: u64,

    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// prompt printed before every command line
    prompt: String,
}

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server the standard streams are bound to before the loop starts.
    pub connect: Option<SocketAddrV4>,
    /// `None` means no timeout.
    pub send_timeout: Option<Duration>,
    pub prompt: String,
}

impl Config {
    /// Parse `args` (without the program name).
    ///
    /// `--help` and invalid options come back as [`EarlyExit`]; its `output`
    /// is the text to show.
    pub fn from_args(command_name: &str, args: &[&str]) -> Result<Self, EarlyExit> {
        let cli = Cli::from_args(&[command_name], args)?;
        Ok(Self {
            connect: cli.connect,
            send_timeout: (cli.send_timeout > 0).then(|| Duration::from_secs(cli.send_timeout)),
            prompt: cli.prompt,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect: None,
            send_timeout: Some(Duration::from_secs(DEFAULT_SEND_TIMEOUT_SECS)),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_no_args_gives_defaults() {
        assert_eq!(Config::from_args("lsh", &[]).unwrap(), Config::default());
    }

    #[test]
    fn test_connect_and_timeout() {
        let config =
            Config::from_args("lsh", &["-c", "127.0.0.1:4444", "--send-timeout", "3"]).unwrap();
        assert_eq!(
            config.connect,
            Some(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 4444))
        );
        assert_eq!(config.send_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = Config::from_args("lsh", &["--send-timeout", "0"]).unwrap();
        assert_eq!(config.send_timeout, None);
    }

    #[test]
    fn test_custom_prompt() {
        let config = Config::from_args("lsh", &["--prompt", "$ "]).unwrap();
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn test_help_is_an_early_exit() {
        let early = Config::from_args("lsh", &["--help"]).unwrap_err();
        assert!(early.status.is_ok());
        assert!(early.output.contains("Usage: lsh"));
        assert!(early.output.contains("--connect"));
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let early = Config::from_args("lsh", &["-c", "not-an-ip"]).unwrap_err();
        assert!(early.status.is_err());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let early = Config::from_args("lsh", &["--bogus"]).unwrap_err();
        assert!(early.status.is_err());
        assert!(early.output.contains("--bogus"));
    }
}
