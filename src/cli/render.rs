//! Render command.
//!
//! Resolves every parameter reference in a template with deduplicated,
//! batched bulk reads, then writes the rendered output to a file or
//! stdout.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::sink::Sink;
use crate::core::path::PathPrefix;
use crate::core::store::{ParameterStore, SsmStore};
use crate::core::template;
use crate::error::Result;

/// Render a template.
pub fn execute(
    template_file: Option<&Path>,
    path: &str,
    out: Option<&Path>,
    mode: &str,
) -> Result<()> {
    let store = SsmStore::connect()?;
    run(&store, template_file, path, out, mode)
}

fn run<S: ParameterStore>(
    store: &S,
    template_file: Option<&Path>,
    path: &str,
    out: Option<&Path>,
    mode: &str,
) -> Result<()> {
    let (name, source) = match template_file {
        Some(file) => (file.display().to_string(), fs::read_to_string(file)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            ("<stdin>".to_string(), source)
        }
    };

    let prefix = PathPrefix::new(path);
    let mut sink = Sink::open(out)?;
    template::render_template(store, &name, &source, &prefix, &mut sink)?;
    sink.finish(mode)
}
