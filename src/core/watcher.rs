//! Full `inoticoming` invocations built from a watcher configuration.
//!
//! ```yaml
//! directory: ~/incoming
//! logfile: /var/log/inoticoming.log
//! initial_search: true
//! actions:
//!   - suffix: .changes
//!     command: reprepro -b /srv/repo processincoming main
//! ```

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::actions::command_from_actions;
use crate::error::{Error, Result};
use crate::shell::{QuoteStyle, ShellQuote};

pub const PROGRAM: &str = "inoticoming";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatcherConfig {
    pub directory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logfile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<String>,
    #[serde(default)]
    pub foreground: bool,
    #[serde(default)]
    pub initial_search: bool,
    #[serde(default)]
    pub quote_style: QuoteStyle,
    pub actions: Vec<Action>,
}

/// Resolved command line, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    pub program: String,
    pub options: Vec<String>,
    pub directory: String,
    pub actions: String,
}

fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

impl WatcherConfig {
    pub fn new(directory: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            directory: directory.into(),
            logfile: None,
            pid_file: None,
            foreground: false,
            initial_search: false,
            quote_style: QuoteStyle::default(),
            actions,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.directory.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "directory",
                Some(self.directory.clone()),
                "Watched directory must not be empty",
            ));
        }

        if self.actions.is_empty() {
            return Err(Error::config_invalid_value(
                "actions",
                None,
                "At least one action is required",
            )
            .with_hint("Add an entry with a `command` to `actions`"));
        }

        for (key, value) in [("logfile", &self.logfile), ("pid_file", &self.pid_file)] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(Error::config_invalid_value(
                    key,
                    value.clone(),
                    "Path must not be empty when set",
                ));
            }
        }

        Ok(())
    }

    pub fn invocation(&self) -> Result<Invocation> {
        self.validate()?;
        let quoter = self.quote_style.quoter();

        let mut options = Vec::new();
        if self.foreground {
            options.push("--foreground".to_string());
        }
        if let Some(logfile) = &self.logfile {
            options.push(quoter.quote(&["--logfile", expand_path(logfile).as_str()]));
        }
        if let Some(pid_file) = &self.pid_file {
            options.push(quoter.quote(&["--pid-file", expand_path(pid_file).as_str()]));
        }
        if self.initial_search {
            options.push("--initialsearch".to_string());
        }

        Ok(Invocation {
            program: PROGRAM.to_string(),
            options,
            directory: quoter.quote(&[expand_path(&self.directory).as_str()]),
            actions: command_from_actions(&self.actions, quoter),
        })
    }
}

impl Invocation {
    pub fn to_command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.options.iter().cloned());
        parts.push(self.directory.clone());
        parts.push(self.actions.clone());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions() -> Vec<Action> {
        vec![Action::new("reprepro processincoming main")
            .unwrap()
            .with_suffix(".changes".to_string())]
    }

    #[test]
    fn minimal_invocation() {
        let config = WatcherConfig::new("/srv/incoming", actions());
        let line = config.invocation().unwrap().to_command_line();
        assert_eq!(
            line,
            "inoticoming /srv/incoming --suffix .changes reprepro processincoming main \\;"
        );
    }

    #[test]
    fn options_render_before_directory() {
        let mut config = WatcherConfig::new("/srv/in coming", actions());
        config.foreground = true;
        config.initial_search = true;
        config.logfile = Some("/var/log/ino.log".to_string());
        config.pid_file = Some("/run/ino.pid".to_string());

        let invocation = config.invocation().unwrap();
        assert_eq!(
            invocation.options,
            vec![
                "--foreground",
                "--logfile /var/log/ino.log",
                "--pid-file /run/ino.pid",
                "--initialsearch",
            ]
        );
        assert_eq!(invocation.directory, "'/srv/in coming'");
    }

    #[test]
    fn double_quote_style_applies_everywhere() {
        let mut config = WatcherConfig::new("/srv/in coming", vec![Action::new("run")
            .unwrap()
            .with_prefix("a b".to_string())]);
        config.quote_style = QuoteStyle::Double;

        let line = config.invocation().unwrap().to_command_line();
        assert_eq!(line, "inoticoming \"/srv/in coming\" --prefix \"a b\" run \\;");
    }

    #[test]
    fn tilde_is_expanded() {
        let config = WatcherConfig::new("~/incoming", actions());
        let invocation = config.invocation().unwrap();
        assert!(!invocation.directory.contains('~'));
        assert!(invocation.directory.ends_with("/incoming"));
    }

    #[test]
    fn rejects_empty_actions() {
        let err = WatcherConfig::new("/srv", Vec::new()).invocation().unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert_eq!(err.details["key"], "actions");
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn rejects_blank_directory() {
        let err = WatcherConfig::new(" ", actions()).validate().unwrap_err();
        assert_eq!(err.details["key"], "directory");
    }

    #[test]
    fn rejects_blank_logfile() {
        let mut config = WatcherConfig::new("/srv", actions());
        config.logfile = Some(String::new());
        let err = config.validate().unwrap_err();
        assert_eq!(err.details["key"], "logfile");
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "directory: /srv/incoming\ninitial_search: true\nquote_style: double\nactions:\n  - regexp: '^a'\n    command: run\n";
        let config: WatcherConfig = serde_yml::from_str(yaml).unwrap();
        assert!(config.initial_search);
        assert_eq!(config.quote_style, QuoteStyle::Double);
        assert_eq!(config.actions.len(), 1);
    }
}
