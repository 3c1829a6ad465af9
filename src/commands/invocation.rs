use clap::Args;
use serde::Serialize;

use inoticoming_actions::config;
use inoticoming_actions::log_status;
use inoticoming_actions::shell::QuoteStyle;
use inoticoming_actions::{Invocation, WatcherConfig};

use super::{CmdResult, GlobalArgs, Rendered};

#[derive(Args)]
pub struct InvocationArgs {
    /// Watcher config spec: inline JSON object, @file (JSON or YAML), or - for stdin
    pub spec: String,

    /// Override the config's quoting style
    #[arg(long, value_enum)]
    pub quote_style: Option<QuoteStyle>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationOutput {
    pub command: String,
    pub quote_style: QuoteStyle,
    pub action_count: usize,
    pub invocation: Invocation,
    pub rendered: String,
}

impl Rendered for InvocationOutput {
    fn rendered(&self) -> &str {
        &self.rendered
    }
}

pub fn run(args: InvocationArgs, _global: &GlobalArgs) -> CmdResult<InvocationOutput> {
    let mut watcher: WatcherConfig = config::load(&args.spec)?;
    if let Some(style) = args.quote_style {
        watcher.quote_style = style;
    }

    let invocation = watcher.invocation()?;
    log_status!(
        "invocation",
        "Watching {} with {} action(s)",
        watcher.directory,
        watcher.actions.len()
    );

    let rendered = invocation.to_command_line();

    Ok((
        InvocationOutput {
            command: "invocation".to_string(),
            quote_style: watcher.quote_style,
            action_count: watcher.actions.len(),
            invocation,
            rendered,
        },
        0,
    ))
}
