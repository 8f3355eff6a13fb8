//! List command.

use crate::cli::output;
use crate::cli::ListFormat;
use crate::core::store::{ParameterStore, SsmStore};
use crate::error::Result;

/// List all parameter names.
pub fn execute(format: ListFormat) -> Result<()> {
    let store = SsmStore::connect()?;
    run(&store, format)
}

fn run<S: ParameterStore>(store: &S, format: ListFormat) -> Result<()> {
    let infos = store.list()?;

    match format {
        ListFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }
        ListFormat::Line => {
            if infos.is_empty() {
                output::dimmed("no parameters");
            } else {
                for info in &infos {
                    println!("{}", info.name);
                }
            }
        }
    }

    Ok(())
}
