//! stackfit detect: screen pattern verdict for one node.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use stackfit_layout::lexicon::NameLexicon;
use stackfit_layout::screen::{detect_screen_pattern, ScreenPattern};

use crate::input::{read_source, ConfigArgs};

/// Entry point called from main.rs
pub fn run(file: &Path, node: Option<&str>, config: &ConfigArgs) -> Result<()> {
    let config = config.resolve()?;
    let root = read_source(file, node)?;

    match detect_screen_pattern(&root, &config, &NameLexicon::default()) {
        Some(pattern) => {
            println!("{}", format!("✓ {} is a screen", root.id).green().bold());
            print!("{}", report(&pattern));
        }
        None => println!(
            "{}",
            format!("✗ {} has no header/body/footer anatomy", root.id).yellow()
        ),
    }
    Ok(())
}

fn id_or_dash(node: Option<&stackfit_layout::SourceNode>) -> &str {
    node.map_or("-", |n| n.id.as_str())
}

/// Plain-text details of a detected pattern.
pub(crate) fn report(pattern: &ScreenPattern<'_>) -> String {
    let body: Vec<&str> = pattern.body.iter().map(|n| n.id.as_str()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "  header:            {}", id_or_dash(pattern.header));
    let _ = writeln!(out, "  footer:            {}", id_or_dash(pattern.footer));
    let _ = writeln!(out, "  body:              [{}]", body.join(", "));
    let _ = writeln!(out, "  available height:  {}", pattern.available_height);
    let _ = writeln!(out, "  body height (est): {}", pattern.total_body_height);
    let _ = writeln!(out, "  needs scroll:      {}", pattern.needs_scroll);
    out
}
