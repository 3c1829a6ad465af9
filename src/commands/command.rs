use clap::Args;
use serde::Serialize;

use inoticoming_actions::config;
use inoticoming_actions::shell::QuoteStyle;
use inoticoming_actions::{command_from_actions, Action};

use super::{CmdResult, GlobalArgs, Rendered};

#[derive(Args)]
pub struct CommandArgs {
    /// Action list spec: inline JSON array, @file (JSON or YAML), or - for stdin
    pub spec: String,

    /// Quoting style for --prefix/--suffix/--regexp values
    #[arg(long, value_enum, default_value_t = QuoteStyle::Posix)]
    pub quote_style: QuoteStyle,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutput {
    pub command: String,
    pub quote_style: QuoteStyle,
    pub action_count: usize,
    pub actions: Vec<Action>,
    pub rendered: String,
}

impl Rendered for CommandOutput {
    fn rendered(&self) -> &str {
        &self.rendered
    }
}

pub fn run(args: CommandArgs, _global: &GlobalArgs) -> CmdResult<CommandOutput> {
    let actions = config::load_actions(&args.spec)?;
    let rendered = command_from_actions(&actions, args.quote_style.quoter());

    Ok((
        CommandOutput {
            command: "command".to_string(),
            quote_style: args.quote_style,
            action_count: actions.len(),
            actions,
            rendered,
        },
        0,
    ))
}
