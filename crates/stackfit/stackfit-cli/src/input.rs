//! Reading design documents and layout configuration from disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use stackfit_layout::import::load_source;
use stackfit_layout::{LayoutConfig, SourceNode};

/// Configuration flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON file with layout thresholds; missing fields keep their defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Deepest level that is still laid out
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Largest visible child count that is still laid out
    #[arg(long)]
    pub max_fanout: Option<usize>,
    /// Trust auto-layout axes declared in the document
    #[arg(long)]
    pub auto_layout: bool,
}

impl ConfigArgs {
    /// Config file (or defaults) with flag overrides applied.
    pub fn resolve(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => LayoutConfig::DEFAULT,
        };
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        if let Some(fanout) = self.max_fanout {
            config = config.with_max_fanout(fanout);
        }
        if self.auto_layout {
            config = config.with_declared_axis(true);
        }
        tracing::debug!(?config, "resolved layout config");
        Ok(config)
    }
}

/// Read `file` and select the layout root.
pub fn read_source(file: &Path, node: Option<&str>) -> Result<SourceNode> {
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let root = load_source(&text, node).with_context(|| format!("loading {}", file.display()))?;
    tracing::info!(id = %root.id, nodes = root.subtree_len(), "design loaded");
    Ok(root)
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = ConfigArgs::default().resolve().unwrap();
        assert_eq!(config, LayoutConfig::DEFAULT);
    }

    #[test]
    fn flags_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("layout.json");
        fs::write(&path, r#"{"max_depth": 4, "max_fanout": 30, "scroll_threshold": 0.9}"#).unwrap();

        let args = ConfigArgs {
            config: Some(path),
            max_fanout: Some(12),
            auto_layout: true,
            ..ConfigArgs::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.max_depth, 4);
        assert_eq!(config.max_fanout, 12);
        assert_eq!(config.scroll_threshold, 0.9);
        assert!(config.honor_declared_axis);
    }

    #[test]
    fn bad_config_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let err = ConfigArgs {
            config: Some(path),
            ..ConfigArgs::default()
        }
        .resolve()
        .unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn read_source_reports_missing_node() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        fs::write(
            &path,
            r#"{"document": {"id": "0:1", "name": "Page", "type": "CANVAS",
                "absoluteBoundingBox": {"x": 0, "y": 0, "width": 10, "height": 10}}}"#,
        )
        .unwrap();

        assert_eq!(read_source(&path, None).unwrap().id, "0:1");
        let err = read_source(&path, Some("9:9")).unwrap_err();
        assert!(format!("{:#}", err).contains("node 9:9 not found"));
    }
}
