//! Read command.

use std::fs;
use std::path::Path;

use crate::cli::sink;
use crate::core::store::{ParameterStore, SsmStore};
use crate::error::{Result, StoreError};

/// Read one parameter and print or save its value.
pub fn execute(name: &str, out: Option<&Path>, mode: &str) -> Result<()> {
    let store = SsmStore::connect()?;
    run(&store, name, out, mode)
}

fn run<S: ParameterStore>(store: &S, name: &str, out: Option<&Path>, mode: &str) -> Result<()> {
    let parameter = store
        .get(name)?
        .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

    match out {
        Some(path) => {
            fs::write(path, parameter.value.as_bytes())?;
            sink::apply_mode(path, mode);
        }
        None => println!("{}", parameter.value),
    }

    Ok(())
}
