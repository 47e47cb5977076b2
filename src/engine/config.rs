// ABOUTME: Construction-time configuration for ChunkEngine
// ABOUTME: Mirrors the recognized options: paths, maxdepth, lazy mode, queue, templates

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Construction-time options for a [`crate::ChunkEngine`].
///
/// `tpl` and `tpl_wrapper` are template *specifiers* (`@INLINE`, `@FILE`,
/// `@CHUNK`, or a bare fragment name) resolved through the source resolver
/// when the engine is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Relative prefix for `@FILE` sources, joined onto the selected root.
    #[serde(default)]
    pub basepath: PathBuf,

    /// Selects `core_root` instead of `base_root` as the file root.
    #[serde(default)]
    pub use_core_path: bool,

    #[serde(default)]
    pub base_root: PathBuf,

    #[serde(default)]
    pub core_root: PathBuf,

    /// Bound on placeholder flattening recursion.
    #[serde(default = "default_maxdepth")]
    pub maxdepth: usize,

    /// Mask uncached tags so an outer pass can process them.
    #[serde(default)]
    pub parse_lazy: bool,

    /// Capture per-queue prepare/render timings.
    #[serde(default)]
    pub profile: bool,

    /// Default rendering queue.
    #[serde(default = "default_queue")]
    pub queue: String,

    /// Initial row template specifier.
    #[serde(default)]
    pub tpl: String,

    /// Initial wrapper template specifier.
    #[serde(default)]
    pub tpl_wrapper: String,
}

fn default_maxdepth() -> usize {
    4
}

fn default_queue() -> String {
    "default".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            basepath: PathBuf::new(),
            use_core_path: false,
            base_root: PathBuf::new(),
            core_root: PathBuf::new(),
            maxdepth: default_maxdepth(),
            parse_lazy: false,
            profile: false,
            queue: default_queue(),
            tpl: String::new(),
            tpl_wrapper: String::new(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basepath(mut self, basepath: impl Into<PathBuf>) -> Self {
        self.basepath = basepath.into();
        self
    }

    pub fn with_base_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.base_root = root.into();
        self
    }

    pub fn with_core_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.core_root = root.into();
        self.use_core_path = true;
        self
    }

    pub fn with_maxdepth(mut self, maxdepth: usize) -> Self {
        self.maxdepth = maxdepth;
        self
    }

    pub fn with_parse_lazy(mut self, parse_lazy: bool) -> Self {
        self.parse_lazy = parse_lazy;
        self
    }

    pub fn with_profile(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = queue.into();
        self
    }

    pub fn with_tpl(mut self, tpl: impl Into<String>) -> Self {
        self.tpl = tpl.into();
        self
    }

    pub fn with_tpl_wrapper(mut self, tpl_wrapper: impl Into<String>) -> Self {
        self.tpl_wrapper = tpl_wrapper.into();
        self
    }

    /// The root directory `@FILE` sources are resolved under.
    pub fn file_root(&self) -> PathBuf {
        let root = if self.use_core_path {
            &self.core_root
        } else {
            &self.base_root
        };
        root.join(&self.basepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.maxdepth, 4);
        assert_eq!(config.queue, "default");
        assert!(!config.parse_lazy);
        assert!(!config.profile);
    }

    #[test]
    fn test_file_root_selection() {
        let config = EngineConfig::new()
            .with_basepath("templates")
            .with_base_root("/srv/site");
        assert_eq!(config.file_root(), PathBuf::from("/srv/site/templates"));

        let config = config.with_core_root("/srv/core");
        assert_eq!(config.file_root(), PathBuf::from("/srv/core/templates"));
    }

    #[test]
    fn test_yaml_deserialization_fills_defaults() {
        let config: EngineConfig = serde_yaml::from_str("parse_lazy: true\n").unwrap();

        assert!(config.parse_lazy);
        assert_eq!(config.maxdepth, 4);
        assert_eq!(config.queue, "default");
    }
}
