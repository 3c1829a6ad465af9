use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

mod commands;
mod output;

use commands::{command, invocation};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "inoticoming-actions")]
#[command(version = VERSION)]
#[command(about = "Render inoticoming action lists and invocations")]
struct Cli {
    /// Print only the rendered command line instead of the JSON envelope
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an action list as inoticoming command clauses
    Command(command::CommandArgs),
    /// Render a full inoticoming invocation from a watcher config
    Invocation(invocation::InvocationArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let mode = if cli.raw {
        ResponseMode::Raw
    } else {
        ResponseMode::Json
    };

    let exit_code = match mode {
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command, &global);
            match output::print_json_result(json_result) {
                Ok(()) => exit_code,
                Err(_) => 1,
            }
        }
        ResponseMode::Raw => match commands::run_raw(cli.command, &global) {
            Ok((rendered, exit_code)) => match output::print_raw(&rendered) {
                Ok(()) => exit_code,
                Err(_) => 1,
            },
            Err(err) => {
                let exit_code = err.code.exit_code();
                let _ = output::print_error(&err);
                exit_code
            }
        },
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
