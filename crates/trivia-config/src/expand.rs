//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains('$') {
        return Ok(value.to_owned());
    }
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_unchanged() {
        assert_eq!(expand_env("plain.html", "template.path").unwrap(), "plain.html");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("TRIVIA_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${TRIVIA_EXPAND_UNSET:-fallback}", "render.default_title").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("TRIVIA_EXPAND_MISSING");
        }
        let err = expand_env("${TRIVIA_EXPAND_MISSING}", "schema.path").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("schema.path"));
        assert!(msg.contains("TRIVIA_EXPAND_MISSING"));
    }
}
