//! Satchel - secret management with AWS SSM Parameter Store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── read          # Read one parameter
//! │   ├── write         # Write one parameter
//! │   ├── delete        # Delete one parameter
//! │   ├── list          # List parameter names
//! │   ├── tree          # Tree view of parameter paths
//! │   ├── clipboard     # Copy a value to the clipboard
//! │   ├── rename        # Move a parameter or subtree
//! │   ├── render        # Template rendering with batched resolution
//! │   ├── exec          # Run a command with parameters as env vars
//! │   └── sink          # File/stdout destination with mode bits
//! └── core/             # Core library components
//!     ├── path          # Path prefix normalization
//!     ├── store/        # ParameterStore trait + SSM backend
//!     ├── template/     # Scan → resolve → render pipeline
//!     └── env           # Parameter name → env var name
//! ```
//!
//! # Template rendering
//!
//! `satchel render` resolves `{{ param(name="...") }}` references in a
//! template against the parameter store. The template is executed twice:
//! a discovery pass collects the set of referenced keys, the keys are
//! bulk-read in batches of at most ten, and a render pass substitutes
//! the resolved values. Keys the store does not have substitute as the
//! empty string.

pub mod cli;
pub mod core;
pub mod error;
