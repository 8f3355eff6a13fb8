//! Environment variable assembly for `satchel exec`.
//!
//! Parameter paths become environment variable names: the path prefix
//! is stripped, remaining separators (`/`, `-`, `.`) become `_`, and
//! the result is uppercased. `/app/db/pass-word` under `/app/` becomes
//! `DB_PASS_WORD`.

use crate::core::path::PathPrefix;

/// Convert a parameter name into an environment variable name.
pub fn env_var_name(prefix: &PathPrefix, name: &str) -> String {
    prefix
        .strip(name)
        .chars()
        .map(|c| match c {
            '/' | '-' | '.' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_uppercases() {
        let prefix = PathPrefix::new("/app/");
        assert_eq!(env_var_name(&prefix, "/app/db_pass"), "DB_PASS");
    }

    #[test]
    fn replaces_separators_with_underscores() {
        let prefix = PathPrefix::new("/app/");
        assert_eq!(env_var_name(&prefix, "/app/db/pass-word.v2"), "DB_PASS_WORD_V2");
    }

    #[test]
    fn names_outside_the_prefix_keep_their_path() {
        let prefix = PathPrefix::new("/app/");
        assert_eq!(env_var_name(&prefix, "/other/key"), "OTHER_KEY");
    }
}
