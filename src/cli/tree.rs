//! Tree command.
//!
//! Renders parameter names as a path tree. Secure parameters are marked
//! and show their KMS key id.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::cli::output;
use crate::core::store::{ParameterInfo, ParameterStore, SsmStore};
use crate::error::Result;

/// Show all parameters in tree format.
pub fn execute() -> Result<()> {
    let store = SsmStore::connect()?;
    run(&store)
}

fn run<S: ParameterStore>(store: &S) -> Result<()> {
    let infos = store.list()?;
    if infos.is_empty() {
        output::dimmed("no parameters");
        return Ok(());
    }

    let mut root = Node::default();
    for info in infos {
        root.insert(&info);
    }

    println!("/");
    print_children(&root, "");
    Ok(())
}

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
    info: Option<ParameterInfo>,
}

impl Node {
    fn insert(&mut self, info: &ParameterInfo) {
        let mut node = self;
        for segment in info.name.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.info = Some(info.clone());
    }
}

fn print_children(node: &Node, indent: &str) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        println!("{indent}{connector}{}", label(name, child));

        let next = format!("{indent}{}", if last { "    " } else { "│   " });
        print_children(child, &next);
    }
}

fn label(name: &str, node: &Node) -> String {
    match &node.info {
        Some(info) if node.children.is_empty() => {
            if info.kind.is_secure() {
                let key = info.key_id.as_deref().unwrap_or("unknown key");
                format!("{name} 🔐 {}", format!("({key})").dimmed())
            } else {
                name.to_string()
            }
        }
        _ => format!("{name}/"),
    }
}
