use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::action::Action;
use crate::actions::actions_from_args;
use crate::error::{Error, Result};
use crate::io::SpecSource;

/// Parse JSON string into typed value.
pub(crate) fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    serde_json::from_str(s)
        .map_err(|e| Error::validation_invalid_json(e, Some("parse json".to_string())))
}

/// Serialize value to pretty-printed JSON string.
pub fn to_string_pretty<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize json".to_string())))
}

/// Read a spec (inline JSON, `@path`, or `-`) into an untyped JSON value.
///
/// Files with a `.yaml`/`.yml` extension are parsed as YAML.
pub fn load_value(spec: &str) -> Result<Value> {
    let source = SpecSource::parse(spec)?;
    let raw = source.read_to_string()?;

    if source.is_yaml() {
        return serde_yml::from_str(&raw)
            .map_err(|e| Error::config_invalid_yaml(source.describe(), e));
    }

    from_str(&raw)
}

/// Load a spec into a typed configuration value.
pub fn load<T: DeserializeOwned>(spec: &str) -> Result<T> {
    let value = load_value(spec)?;
    serde_json::from_value(value).map_err(|e| {
        Error::config_invalid_value("spec", Some(spec.to_string()), e.to_string())
    })
}

/// Load an action list. The spec must hold a single array of actions.
pub fn load_actions(spec: &str) -> Result<Vec<Action>> {
    let value = load_value(spec)?;
    let actions = actions_from_args(std::slice::from_ref(&value))?;
    crate::log_status!("load", "Read {} action(s)", actions.len());
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn load_actions_from_inline_json() {
        let actions = load_actions(r#"[{"command": "true"}, {"suffix": ".deb", "command": "x"}]"#)
            .unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].command(), "x");
    }

    #[test]
    fn load_actions_from_yaml_file() {
        let mut temp = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(temp, "- prefix: IN_\n  command: run\n- command: echo hi").unwrap();

        let actions = load_actions(&format!("@{}", temp.path().display())).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].command(), "run");
    }

    #[test]
    fn load_actions_rejects_mapping() {
        let err = load_actions(r#"{"command": "run"}"#).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_type");
    }

    #[test]
    fn load_value_reports_bad_json() {
        let err = load_value("[{").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn load_value_reports_bad_yaml() {
        let mut temp = Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(temp, "- command: [unterminated").unwrap();

        let err = load_value(&format!("@{}", temp.path().display())).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_yaml");
    }
}
