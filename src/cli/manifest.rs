// ABOUTME: YAML render-manifest parsing for the chunkweave CLI
// ABOUTME: Describes engine options, named chunks, placeholders, and row insertions

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineConfig;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;

/// One row insertion: the dot-path key, an optional row-template specifier
/// (which becomes the current row template for this and subsequent rows),
/// and an optional explicit flat placeholder map for this insertion only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSpec {
    pub key: String,

    #[serde(default)]
    pub template: Option<String>,

    #[serde(default)]
    pub placeholders: Option<BTreeMap<String, String>>,
}

/// A complete render description: engine configuration, template
/// specifiers, in-memory chunks, global placeholders (arbitrarily nested),
/// and the ordered list of row insertions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub engine: EngineConfig,

    /// Row template specifier applied before the first row.
    #[serde(default)]
    pub template: Option<String>,

    /// Wrapper template specifier.
    #[serde(default)]
    pub wrapper: Option<String>,

    /// Join separator between sibling renderings.
    #[serde(default)]
    pub separator: Option<String>,

    /// Named fragments made available to `@CHUNK` and bare-name specifiers.
    #[serde(default)]
    pub chunks: IndexMap<String, String>,

    /// Global placeholder values, flattened into the queue's store.
    #[serde(default)]
    pub placeholders: IndexMap<String, serde_yaml::Value>,

    pub rows: Vec<RowSpec>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
engine:
  parse_lazy: true
  queue: menu

template: "@INLINE <li>[[+name]]</li>"
wrapper: "@INLINE <ul>[[+wrapper]]</ul>"
separator: ""

chunks:
  header: "<h1>[[+title]]</h1>"

placeholders:
  site:
    title: "Fruit"

rows:
  - key: fruits.0
    placeholders:
      name: Apple
  - key: fruits.1
    placeholders:
      name: Pear
"#;

    #[test]
    fn test_parse_sample_manifest() {
        let manifest = Manifest::from_yaml(SAMPLE).unwrap();

        assert!(manifest.engine.parse_lazy);
        assert_eq!(manifest.engine.queue, "menu");
        assert_eq!(
            manifest.template.as_deref(),
            Some("@INLINE <li>[[+name]]</li>")
        );
        assert_eq!(manifest.separator.as_deref(), Some(""));
        assert_eq!(manifest.chunks.get("header").unwrap(), "<h1>[[+title]]</h1>");
        assert_eq!(manifest.rows.len(), 2);
        assert_eq!(manifest.rows[0].key, "fruits.0");
        assert_eq!(
            manifest.rows[1]
                .placeholders
                .as_ref()
                .unwrap()
                .get("name")
                .map(String::as_str),
            Some("Pear")
        );
    }

    #[test]
    fn test_rows_are_required() {
        let result = Manifest::from_yaml("template: \"@INLINE x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_minimal_manifest() {
        let manifest = Manifest::from_yaml("rows: []\n").unwrap();

        assert!(manifest.rows.is_empty());
        assert_eq!(manifest.engine.maxdepth, 4);
    }
}
