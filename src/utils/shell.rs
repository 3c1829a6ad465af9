//! Shell escaping and quoting utilities.
//!
//! [`ShellQuote`] is the seam the action renderer quotes through. Two styles
//! ship with the crate:
//! - [`PosixQuote`] - bare when safe, otherwise single-quoted
//! - [`DoubleQuote`] - prefers double quotes, matching the `shellquote`
//!   function found in classic configuration-management tooling

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Characters that never need quoting.
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '@' | '%' | '_' | '+' | '=' | ':' | ',' | '.' | '/' | '-'
        )
}

fn is_safe_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_safe_char)
}

/// Characters that stay live inside double quotes.
const DOUBLE_QUOTE_DANGEROUS: &[char] = &['!', '"', '`', '$', '\\'];

/// Quoting strategy used to turn a sequence of words into one shell-safe fragment.
pub trait ShellQuote {
    fn quote(&self, args: &[&str]) -> String;
}

/// Escape a value for use inside single quotes.
/// Replaces `'` with `'\''` (end quote, escaped quote, start quote).
pub fn escape_single_quote_content(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// Quote a single argument for shell execution.
/// - Empty strings become `''`
/// - Strings with anything outside the safe set are wrapped in single quotes
/// - Embedded single quotes are escaped
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    if is_safe_word(arg) {
        return arg.to_string();
    }

    format!("'{}'", escape_single_quote_content(arg))
}

/// Quote and join multiple arguments for shell execution.
pub fn quote_args(args: &[&str]) -> String {
    args.iter()
        .map(|a| quote_arg(a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a single argument, preferring double quotes over single quotes.
pub fn double_quote_arg(arg: &str) -> String {
    if is_safe_word(arg) {
        return arg.to_string();
    }

    if !arg.contains(DOUBLE_QUOTE_DANGEROUS) {
        return format!("\"{}\"", arg);
    }

    if !arg.contains('\'') {
        return format!("'{}'", arg);
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if DOUBLE_QUOTE_DANGEROUS.contains(&c) {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosixQuote;

impl ShellQuote for PosixQuote {
    fn quote(&self, args: &[&str]) -> String {
        quote_args(args)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleQuote;

impl ShellQuote for DoubleQuote {
    fn quote(&self, args: &[&str]) -> String {
        args.iter()
            .map(|a| double_quote_arg(a))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Selectable quoting style for configuration files and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Posix,
    Double,
}

impl QuoteStyle {
    pub fn quoter(&self) -> &'static dyn ShellQuote {
        match self {
            QuoteStyle::Posix => &PosixQuote,
            QuoteStyle::Double => &DoubleQuote,
        }
    }
}
