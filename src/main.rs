use lsh::config::Config;
use lsh::{Interpreter, logging, net};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();

    let argv: Vec<String> = std::env::args().collect();
    let command_name = argv.first().map(String::as_str).unwrap_or("lsh");
    let args: Vec<&str> = argv.iter().skip(1).map(String::as_str).collect();

    let config = match Config::from_args(command_name, &args) {
        Ok(config) => config,
        Err(early) => {
            // Like any invalid invocation, asking for usage does not start the shell.
            match early.status {
                Ok(()) => println!("{}", early.output.trim_end()),
                Err(()) => eprintln!("{}", early.output.trim_end()),
            }
            return ExitCode::FAILURE;
        }
    };

    if let Some(addr) = config.connect {
        if let Err(e) = net::redirect_to_server(addr, config.send_timeout) {
            eprintln!("lsh: {e:#}");
            return ExitCode::FAILURE;
        }
    }

    match Interpreter::default().with_prompt(config.prompt).repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lsh: {e}");
            ExitCode::FAILURE
        }
    }
}
