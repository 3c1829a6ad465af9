use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Filename match option accepted by `inoticoming` in front of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOption {
    Prefix,
    Suffix,
    Regexp,
}

impl MatchOption {
    /// Rendering order of options within an action clause.
    pub const ORDER: [MatchOption; 3] = [
        MatchOption::Prefix,
        MatchOption::Suffix,
        MatchOption::Regexp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOption::Prefix => "prefix",
            MatchOption::Suffix => "suffix",
            MatchOption::Regexp => "regexp",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            MatchOption::Prefix => "--prefix",
            MatchOption::Suffix => "--suffix",
            MatchOption::Regexp => "--regexp",
        }
    }
}

/// One command to run when a matching file appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    regexp: Option<String>,
    command: String,
}

/// Wire shape of an action before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAction {
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    suffix: Option<String>,
    #[serde(default)]
    regexp: Option<String>,
    command: String,
}

impl TryFrom<RawAction> for Action {
    type Error = Error;

    fn try_from(raw: RawAction) -> Result<Self> {
        Ok(Action::new(raw.command)?
            .with_prefix(raw.prefix)
            .with_suffix(raw.suffix)
            .with_regexp(raw.regexp))
    }
}

/// Empty option values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Action {
    /// Create an action for `command`. The command is passed through to the
    /// shell verbatim, so it must already be trusted; only emptiness is checked.
    pub fn new(command: impl Into<String>) -> Result<Self> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                "command",
                "Action command must not be empty",
                None,
            ));
        }

        Ok(Self {
            prefix: None,
            suffix: None,
            regexp: None,
            command,
        })
    }

    pub fn with_prefix(mut self, prefix: impl Into<Option<String>>) -> Self {
        self.prefix = non_empty(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<Option<String>>) -> Self {
        self.suffix = non_empty(suffix.into());
        self
    }

    pub fn with_regexp(mut self, regexp: impl Into<Option<String>>) -> Self {
        self.regexp = non_empty(regexp.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn option(&self, option: MatchOption) -> Option<&str> {
        match option {
            MatchOption::Prefix => self.prefix.as_deref(),
            MatchOption::Suffix => self.suffix.as_deref(),
            MatchOption::Regexp => self.regexp.as_deref(),
        }
    }

    /// Set match options in rendering order.
    pub fn options(&self) -> impl Iterator<Item = (MatchOption, &str)> + '_ {
        MatchOption::ORDER
            .into_iter()
            .filter_map(move |opt| self.option(opt).map(|value| (opt, value)))
    }
}
