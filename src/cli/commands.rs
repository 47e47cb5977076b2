// ABOUTME: Command implementations for the chunkweave CLI
// ABOUTME: Builds an engine from a manifest, runs insertions, renders or resolves

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::engine::{ChunkEngine, Collaborators};
use crate::placeholder::PlaceholderValue;
use crate::source::MemoryChunkStore;

use super::manifest::Manifest;

/// Render the manifest's queue and print or write the output.
pub fn render(
    manifest_path: &Path,
    queue: Option<String>,
    separator: Option<String>,
    output: Option<PathBuf>,
    keep: bool,
) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let mut engine = engine_from_manifest(&manifest);

    for (key, value) in &manifest.placeholders {
        let value = PlaceholderValue::from(value.clone());
        engine.set_placeholders(&value, key, None);
    }

    for row in &manifest.rows {
        if let Some(spec) = &row.template {
            let template = engine.template_chunk(spec);
            engine.set_tpl(&template);
        }
        engine.prepare_template(&row.key, row.placeholders.as_ref(), None);
    }

    let separator = separator
        .or_else(|| manifest.separator.clone())
        .unwrap_or_else(|| "\r\n".to_string());
    let rendered = engine.process(queue.as_deref(), &separator, !keep);

    if manifest.engine.profile {
        let profile = engine.take_profile(queue.as_deref());
        debug!(
            "prepare: {:?}, render: {:?}",
            profile.prepare, profile.render
        );
    }

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!("output written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Resolve a template specifier to literal text and print it.
pub fn resolve(spec: &str, manifest_path: Option<PathBuf>) -> Result<()> {
    let manifest = match manifest_path {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::default(),
    };
    let engine = engine_from_manifest(&manifest);

    println!("{}", engine.template_chunk(spec));
    Ok(())
}

fn engine_from_manifest(manifest: &Manifest) -> ChunkEngine {
    let mut config = manifest.engine.clone();
    if let Some(template) = &manifest.template {
        config.tpl = template.clone();
    }
    if let Some(wrapper) = &manifest.wrapper {
        config.tpl_wrapper = wrapper.clone();
    }

    let mut chunks = MemoryChunkStore::new();
    for (name, content) in &manifest.chunks {
        chunks.insert(name.clone(), content.clone());
    }

    let collaborators = Collaborators {
        chunks: Box::new(chunks),
        ..Collaborators::default()
    };
    ChunkEngine::with_collaborators(config, collaborators)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_from_manifest_wires_chunks() {
        let manifest = Manifest::from_yaml(
            r#"
template: "@CHUNK row"
chunks:
  row: "<li>[[+name]]</li>"
rows: []
"#,
        )
        .unwrap();

        let engine = engine_from_manifest(&manifest);
        assert_eq!(engine.template_chunk("row"), "<li>[[+name]]</li>");
    }

    #[test]
    fn test_engine_from_manifest_resolves_inline_templates() {
        let manifest = Manifest::from_yaml(
            r#"
template: "@INLINE [[+name]]"
rows: []
"#,
        )
        .unwrap();

        let mut engine = engine_from_manifest(&manifest);
        engine.prepare_template(
            "k",
            Some(&[("name".to_string(), "V".to_string())].into_iter().collect()),
            None,
        );
        assert_eq!(engine.process(None, "", true), "V");
    }
}
