//! Command-line interface.

pub mod clipboard;
pub mod completions;
pub mod delete;
pub mod exec;
pub mod list;
pub mod output;
pub mod read;
pub mod rename;
pub mod render;
pub mod sink;
pub mod tree;
pub mod write;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Satchel - secret management with AWS SSM Parameter Store.
#[derive(Parser)]
#[command(
    name = "satchel",
    about = "Secret management with AWS SSM Parameter Store",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read a parameter value
    #[command(visible_alias = "get")]
    Read {
        /// Parameter name
        name: String,
        /// Write the value to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Output file mode (octal)
        #[arg(short, long, default_value = "0600")]
        mode: String,
    },

    /// Write a parameter value
    #[command(visible_alias = "put")]
    Write {
        /// Parameter name
        name: String,
        /// Store as String (PLAIN TEXT) instead of SecureString
        #[arg(short, long)]
        string: bool,
        /// Overwrite an existing value
        #[arg(short = 'f', long)]
        overwrite: bool,
    },

    /// Delete a parameter
    #[command(visible_alias = "rm")]
    Delete {
        /// Parameter name
        name: String,
        /// Skip confirmation; a missing parameter is not an error
        #[arg(short, long)]
        force: bool,
    },

    /// List parameters
    #[command(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "line")]
        format: ListFormat,
    },

    /// Show parameters in tree format
    Tree,

    /// Copy a parameter value to the clipboard
    #[command(visible_alias = "c")]
    Clipboard {
        /// Parameter name
        name: String,
    },

    /// Rename a parameter or a whole subtree
    #[command(visible_alias = "mv")]
    Rename {
        /// Source parameter name or path
        src: String,
        /// Destination name or path
        dest: String,
    },

    /// Render a template, resolving parameter references
    Render {
        /// Template file (stdin when omitted)
        template: Option<PathBuf>,
        /// Path prefix for relative references
        #[arg(short, long, default_value = "")]
        path: String,
        /// Write rendered output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Output file mode (octal)
        #[arg(short, long, default_value = "0600")]
        mode: String,
    },

    /// Execute a command with parameters as environment variables
    Exec {
        /// Path prefix to fetch parameters from
        #[arg(short, long, default_value = "/")]
        path: String,
        /// Overwrite existing environment variables
        #[arg(short = 'f', long)]
        overwrite: bool,
        /// Inject only plain-text values
        #[arg(long)]
        safe: bool,
        /// Command and arguments (default: $SHELL)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Output formats for `list`.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ListFormat {
    Line,
    Json,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Read { name, out, mode } => read::execute(&name, out.as_deref(), &mode),
        Write {
            name,
            string,
            overwrite,
        } => write::execute(&name, string, overwrite),
        Delete { name, force } => delete::execute(&name, force),
        List { format } => list::execute(format),
        Tree => tree::execute(),
        Clipboard { name } => clipboard::execute(&name),
        Rename { src, dest } => rename::execute(&src, &dest),
        Render {
            template,
            path,
            out,
            mode,
        } => render::execute(template.as_deref(), &path, out.as_deref(), &mode),
        Exec {
            path,
            overwrite,
            safe,
            command,
        } => exec::execute(&path, overwrite, safe, &command),
        Completions { shell } => completions::execute(shell),
    }
}
