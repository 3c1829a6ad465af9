use serde::Serialize;

pub type CmdResult<T> = inoticoming_actions::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Command output that can also be printed as a bare command line.
pub(crate) trait Rendered: Serialize {
    fn rendered(&self) -> &str;
}

pub mod command;
pub mod invocation;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

/// Dispatch a command to its handler and keep only the rendered line.
macro_rules! dispatch_raw {
    ($args:expr, $global:expr, $module:ident) => {
        $module::run($args, $global).map(|(output, exit_code)| {
            (Rendered::rendered(&output).to_string(), exit_code)
        })
    };
}

pub(crate) fn run_json(
    cmd: crate::Commands,
    global: &GlobalArgs,
) -> (inoticoming_actions::Result<serde_json::Value>, i32) {
    match cmd {
        crate::Commands::Command(args) => dispatch!(args, global, command),
        crate::Commands::Invocation(args) => dispatch!(args, global, invocation),
    }
}

pub(crate) fn run_raw(
    cmd: crate::Commands,
    global: &GlobalArgs,
) -> inoticoming_actions::Result<(String, i32)> {
    match cmd {
        crate::Commands::Command(args) => dispatch_raw!(args, global, command),
        crate::Commands::Invocation(args) => dispatch_raw!(args, global, invocation),
    }
}
