//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages. Values without a
/// `${` are returned unchanged, so a bare `$VAR` is kept literally.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.var_name),
    })
}

/// Unset variable found during expansion.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_bare_dollar_kept_literally() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WK_EXPAND_BARE_TEST");
        }

        let value = expand_env("host$WK_EXPAND_BARE_TEST", "server.host").unwrap();

        assert_eq!(value, "host$WK_EXPAND_BARE_TEST");
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WK_EXPAND_SET_TEST", "wiki.local");
        }

        let value = expand_env("${WK_EXPAND_SET_TEST}", "server.host").unwrap();

        assert_eq!(value, "wiki.local");
        unsafe {
            std::env::remove_var("WK_EXPAND_SET_TEST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WK_EXPAND_UNSET_TEST");
        }

        let value = expand_env("${WK_EXPAND_UNSET_TEST:-fallback}", "server.host").unwrap();

        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_expand_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WK_EXPAND_MISSING_TEST");
        }

        let err = expand_env("${WK_EXPAND_MISSING_TEST}", "identity.header").unwrap_err();

        assert!(err.to_string().contains("WK_EXPAND_MISSING_TEST"));
        assert!(err.to_string().contains("identity.header"));
    }
}
