//! stackfit build: lay out a design document and print the tree.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use stackfit_layout::{LayoutBuilder, LayoutTree};

use crate::input::{read_source, ConfigArgs};

/// How the layout tree is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented one-line-per-node outline
    Outline,
    /// Pretty-printed JSON
    Json,
}

/// Entry point called from main.rs
pub fn run(file: &Path, node: Option<&str>, format: Format, config: &ConfigArgs) -> Result<()> {
    let config = config.resolve()?;
    let root = read_source(file, node)?;
    let tree = LayoutBuilder::new(config).build_tree(&root);

    print!("{}", render(&tree, format)?);

    if !tree.is_complete() {
        eprintln!(
            "{}",
            format!("⚠ {} subtree(s) degraded to leaves", tree.degraded.len()).yellow().bold()
        );
        for d in &tree.degraded {
            eprintln!("  {} ({})", d.node_id, d.reason);
        }
    }
    Ok(())
}

/// Render `tree` in `format`.
pub(crate) fn render(tree: &LayoutTree<'_>, format: Format) -> Result<String> {
    Ok(match format {
        Format::Outline => tree.root.to_string(),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(tree)?;
            json.push('\n');
            json
        }
    })
}
