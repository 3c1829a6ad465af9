//! Render action lists into the trailing command list `inoticoming` expects.
//!
//! Each action becomes one clause:
//!
//! ```text
//! [--prefix P] [--suffix S] [--regexp R] <command> \;
//! ```
//!
//! Option values go through a [`ShellQuote`] strategy. The command is emitted
//! verbatim; `inoticoming` hands it to the shell, so callers supply trusted text.

use serde::Deserialize;
use serde_json::Value;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::shell::ShellQuote;

/// Terminator `inoticoming` expects after each command, as typed on a shell line.
pub const CLAUSE_TERMINATOR: &str = "\\;";

const FUNCTION_NAME: &str = "command_from_actions";

/// Render one action clause.
pub fn action_clause(action: &Action, quoter: &dyn ShellQuote) -> String {
    let mut bits: Vec<String> = action
        .options()
        .map(|(opt, value)| quoter.quote(&[opt.flag(), value]))
        .collect();

    bits.push(action.command().to_string());
    bits.push(CLAUSE_TERMINATOR.to_string());
    bits.join(" ")
}

/// Render all actions, in order, as one space-separated string.
pub fn command_from_actions(actions: &[Action], quoter: &dyn ShellQuote) -> String {
    actions
        .iter()
        .map(|action| action_clause(action, quoter))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse loosely-typed arguments into actions.
///
/// Accepts exactly one argument, which must be an array of action objects.
pub fn actions_from_args(args: &[Value]) -> Result<Vec<Action>> {
    let [list] = args else {
        return Err(Error::validation_argument_count(FUNCTION_NAME, 1, args.len()));
    };

    let Value::Array(items) = list else {
        return Err(Error::validation_invalid_type(
            FUNCTION_NAME,
            "an array",
            json_type_name(list),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Action::deserialize(item).map_err(|e| {
                Error::validation_invalid_argument(
                    format!("actions[{}]", index),
                    e.to_string(),
                    Some(index),
                )
            })
        })
        .collect()
}

/// Host-call entry point: validate `args`, then render.
///
/// Nothing is rendered unless every argument and element is valid.
pub fn command_from_args(args: &[Value], quoter: &dyn ShellQuote) -> Result<String> {
    let actions = actions_from_args(args)?;
    Ok(command_from_actions(&actions, quoter))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{DoubleQuote, PosixQuote};
    use serde_json::json;

    fn action(command: &str) -> Action {
        Action::new(command).unwrap()
    }

    #[test]
    fn command_only_clause_has_no_padding() {
        assert_eq!(command_from_actions(&[action("echo hi")], &PosixQuote), "echo hi \\;");
    }

    #[test]
    fn golden_two_actions() {
        let actions = vec![
            action("echo hi"),
            action("run").with_prefix("IN_".to_string()),
        ];

        assert_eq!(
            command_from_actions(&actions, &PosixQuote),
            "echo hi \\; --prefix IN_ run \\;"
        );
    }

    #[test]
    fn all_options_render_in_fixed_order() {
        let a = action("reprepro processincoming main")
            .with_regexp("^[a-z]+".to_string())
            .with_suffix(".changes".to_string())
            .with_prefix("pkg ".to_string());

        assert_eq!(
            action_clause(&a, &PosixQuote),
            "--prefix 'pkg ' --suffix .changes --regexp '^[a-z]+' reprepro processincoming main \\;"
        );
    }

    #[test]
    fn command_is_not_quoted() {
        let a = action("sh -c 'mv \"$1\" /srv'").with_suffix(".tar".to_string());
        assert_eq!(
            action_clause(&a, &PosixQuote),
            "--suffix .tar sh -c 'mv \"$1\" /srv' \\;"
        );
    }

    #[test]
    fn quoting_strategy_is_pluggable() {
        let a = action("run").with_prefix("a b".to_string());
        assert_eq!(action_clause(&a, &DoubleQuote), "--prefix \"a b\" run \\;");
    }

    #[test]
    fn one_terminator_per_action() {
        let actions: Vec<Action> = (0..5)
            .map(|i| action(&format!("job{}", i)).with_suffix(".in".to_string()))
            .collect();

        let rendered = command_from_actions(&actions, &PosixQuote);
        assert_eq!(rendered.matches(CLAUSE_TERMINATOR).count(), 5);
    }

    #[test]
    fn empty_list_renders_empty_string() {
        assert_eq!(command_from_actions(&[], &PosixQuote), "");
    }

    #[test]
    fn quoter_called_once_per_present_option() {
        use std::cell::Cell;

        struct Counting(Cell<usize>);
        impl ShellQuote for Counting {
            fn quote(&self, args: &[&str]) -> String {
                self.0.set(self.0.get() + 1);
                args.join("=")
            }
        }

        let counter = Counting(Cell::new(0));
        let actions = vec![
            action("a"),
            action("b").with_prefix("p".to_string()).with_regexp("r".to_string()),
        ];

        let rendered = command_from_actions(&actions, &counter);
        assert_eq!(counter.0.get(), 2);
        assert_eq!(rendered, "a \\; --prefix=p --regexp=r b \\;");
    }

    #[test]
    fn args_golden() {
        let args = vec![json!([
            {"command": "echo hi"},
            {"prefix": "IN_", "command": "run"}
        ])];

        assert_eq!(
            command_from_args(&args, &PosixQuote).unwrap(),
            "echo hi \\; --prefix IN_ run \\;"
        );
    }

    #[test]
    fn args_require_exactly_one() {
        let err = command_from_args(&[], &PosixQuote).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.argument_count");

        let err = command_from_args(&[json!([]), json!([])], &PosixQuote).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.argument_count");
        assert_eq!(err.details["received"], 2);
    }

    #[test]
    fn args_must_be_array() {
        let err = command_from_args(&[json!({"command": "run"})], &PosixQuote).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_type");
        assert_eq!(err.details["received"], "object");
    }

    #[test]
    fn args_report_bad_element_index() {
        let args = vec![json!([{"command": "ok"}, {"prefix": "IN_"}])];
        let err = command_from_args(&args, &PosixQuote).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
        assert_eq!(err.details["index"], 1);
        assert_eq!(err.details["field"], "actions[1]");
    }
}
