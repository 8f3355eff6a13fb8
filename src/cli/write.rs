//! Write command.
//!
//! The value comes from an interactive prompt (hidden unless `--string`)
//! or, when stdin is piped, from stdin verbatim.

use std::io::{self, Read};

use atty::Stream;
use dialoguer::{Input, Password};

use crate::cli::output;
use crate::core::store::{ParameterKind, ParameterStore, SsmStore};
use crate::error::Result;

/// Write a parameter value.
pub fn execute(name: &str, string: bool, overwrite: bool) -> Result<()> {
    let value = read_value(string)?;
    let kind = if string {
        ParameterKind::String
    } else {
        ParameterKind::SecureString
    };

    let store = SsmStore::connect()?;
    store.put(name, &value, kind, overwrite)?;
    output::success(&format!("wrote {name} ({kind})"));
    Ok(())
}

fn read_value(string: bool) -> Result<String> {
    if atty::is(Stream::Stdin) {
        let value = if string {
            Input::<String>::new()
                .with_prompt("Enter text")
                .interact_text()
                .map_err(io::Error::other)?
        } else {
            Password::new()
                .with_prompt("Enter secret")
                .interact()
                .map_err(io::Error::other)?
        };
        Ok(value)
    } else {
        let mut value = String::new();
        io::stdin().read_to_string(&mut value)?;
        Ok(value)
    }
}
