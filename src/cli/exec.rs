//! Exec command.
//!
//! Fetches every parameter under a path prefix and runs a command with
//! the values injected as environment variables.

use zeroize::Zeroizing;

use crate::core::env::env_var_name;
use crate::core::path::PathPrefix;
use crate::core::store::{Parameter, ParameterStore, SsmStore};
use crate::error::{Error, Result};

/// Run a command with parameters as environment variables.
pub fn execute(path: &str, overwrite: bool, safe: bool, command: &[String]) -> Result<()> {
    let store = SsmStore::connect()?;

    let prefix = PathPrefix::new(path);
    let parameters = store.get_by_path(prefix.as_str())?;

    let (program, args) = match command.split_first() {
        Some((program, args)) => (program.clone(), args.to_vec()),
        None => {
            let shell = std::env::var("SHELL").map_err(|_| {
                Error::InvalidInput("no command given and $SHELL is not set".to_string())
            })?;
            (shell, Vec::new())
        }
    };

    let mut cmd = std::process::Command::new(&program);
    cmd.args(&args);
    for (key, value) in assemble_env(&prefix, parameters, overwrite, safe) {
        // Wipe the plaintext copy once it is handed to the child.
        let value = Zeroizing::new(value);
        cmd.env(key, value.as_str());
    }

    let status = cmd.status()?;
    std::process::exit(status.code().unwrap_or(1));
}

/// Convert fetched parameters into (name, value) pairs to inject.
///
/// Existing environment variables win unless `overwrite`; `safe` skips
/// encrypted values entirely.
fn assemble_env(
    prefix: &PathPrefix,
    parameters: Vec<Parameter>,
    overwrite: bool,
    safe: bool,
) -> Vec<(String, String)> {
    parameters
        .into_iter()
        .filter(|p| !(safe && p.kind.is_secure()))
        .filter_map(|p| {
            let key = env_var_name(prefix, &p.name);
            if key.is_empty() {
                return None;
            }
            if std::env::var_os(&key).is_some() && !overwrite {
                return None;
            }
            Some((key, p.value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ParameterKind;

    fn parameter(name: &str, value: &str, kind: ParameterKind) -> Parameter {
        Parameter {
            name: name.to_string(),
            value: value.to_string(),
            kind,
        }
    }

    #[test]
    fn converts_names_and_keeps_values() {
        let prefix = PathPrefix::new("/app/");
        let env = assemble_env(
            &prefix,
            vec![parameter("/app/db-pass", "p", ParameterKind::SecureString)],
            false,
            false,
        );
        assert_eq!(env, vec![("DB_PASS".to_string(), "p".to_string())]);
    }

    #[test]
    fn safe_skips_secure_values() {
        let prefix = PathPrefix::new("/app/");
        let env = assemble_env(
            &prefix,
            vec![
                parameter("/app/public", "1", ParameterKind::String),
                parameter("/app/secret", "2", ParameterKind::SecureString),
            ],
            false,
            true,
        );
        assert_eq!(env, vec![("PUBLIC".to_string(), "1".to_string())]);
    }

    #[test]
    fn existing_variables_win_without_overwrite() {
        let prefix = PathPrefix::new("/satchel-test/");
        std::env::set_var("SATCHEL_EXEC_TEST_VAR", "from-env");

        let params = vec![parameter(
            "/satchel-test/satchel-exec-test-var",
            "from-store",
            ParameterKind::String,
        )];

        let env = assemble_env(&prefix, params.clone(), false, false);
        assert!(env.is_empty());

        let env = assemble_env(&prefix, params, true, false);
        assert_eq!(
            env,
            vec![("SATCHEL_EXEC_TEST_VAR".to_string(), "from-store".to_string())]
        );

        std::env::remove_var("SATCHEL_EXEC_TEST_VAR");
    }
}
