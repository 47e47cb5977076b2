// ABOUTME: ChunkEngine, the public template-composition API
// ABOUTME: Owns per-queue trees and stores, the resolver, and the render pipeline

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::placeholder::{PlaceholderStore, PlaceholderValue};
use crate::source::{
    ChunkStore, EmptyChunkStore, FileLoader, FsLoader, SharedSourceCache, SourceCache,
    SourceResolver,
};
use crate::subst::{tags, BasicTagSubstituter, TagSubstituter};
use crate::tree::{Compositor, TemplateTree};

use super::config::EngineConfig;
use super::profile::Profile;

/// Injectable collaborators: the process-wide source cache, the filesystem
/// read primitive, the named-fragment store, and the substitution engine.
pub struct Collaborators {
    pub cache: SharedSourceCache,
    pub files: Box<dyn FileLoader>,
    pub chunks: Box<dyn ChunkStore>,
    pub substituter: Box<dyn TagSubstituter>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            cache: SourceCache::shared(),
            files: Box::new(FsLoader),
            chunks: Box::new(EmptyChunkStore),
            substituter: Box::new(BasicTagSubstituter),
        }
    }
}

#[derive(Default)]
struct QueueState {
    store: PlaceholderStore,
    tree: Option<TemplateTree>,
    profile: Profile,
}

/// Hierarchical template-composition engine.
///
/// Rows are inserted at dot-path keys into per-queue template trees;
/// `process` joins each tree bottom-up into one linear template, hands it
/// to the substitution engine together with the queue's flattened
/// placeholder store, and returns the final text. Queues are independent,
/// so several renders can be in flight on one engine instance.
pub struct ChunkEngine {
    tpl: String,
    tpl_wrapper: String,
    queue: String,
    maxdepth: usize,
    parse_lazy: bool,
    profile_enabled: bool,
    resolver: SourceResolver,
    substituter: Box<dyn TagSubstituter>,
    queues: HashMap<String, QueueState>,
}

impl ChunkEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_collaborators(config, Collaborators::default())
    }

    pub fn with_collaborators(config: EngineConfig, collaborators: Collaborators) -> Self {
        let resolver = SourceResolver::new(
            config.file_root(),
            collaborators.cache,
            collaborators.files,
            collaborators.chunks,
        );

        let mut engine = Self {
            tpl: String::new(),
            tpl_wrapper: String::new(),
            queue: config.queue,
            maxdepth: config.maxdepth,
            parse_lazy: config.parse_lazy,
            profile_enabled: config.profile,
            resolver,
            substituter: collaborators.substituter,
            queues: HashMap::new(),
        };

        // initial specifiers go through the setters so lazy masking applies
        let tpl = engine.resolver.resolve(&config.tpl);
        engine.set_tpl(&tpl);
        let wrapper = engine.resolver.resolve(&config.tpl_wrapper);
        engine.set_tpl_wrapper(&wrapper);
        engine
    }

    pub fn set_basepath(&mut self, basepath: impl Into<PathBuf>) {
        self.resolver.set_basepath(basepath.into());
    }

    pub fn set_queue(&mut self, queue: impl Into<String>) {
        self.queue = queue.into();
    }

    pub fn get_queue(&self) -> &str {
        &self.queue
    }

    /// Change the current row template. `tpl` is literal template text;
    /// uncached sigils are masked here when lazy mode is on.
    pub fn set_tpl(&mut self, tpl: &str) {
        self.tpl = self.masked(tpl);
    }

    /// Change the current wrapper template.
    pub fn set_tpl_wrapper(&mut self, tpl: &str) {
        self.tpl_wrapper = self.masked(tpl);
    }

    /// Resolve a template specifier to literal text (see the source module
    /// for the `@INLINE` / `@FILE` / `@CHUNK` classification).
    pub fn template_chunk(&self, spec: &str) -> String {
        self.resolver.resolve(spec)
    }

    /// Flatten a value (scalar or nested) into the named queue's store
    /// under `key`. Branches nested deeper than `maxdepth` are dropped
    /// silently.
    pub fn set_placeholders(&mut self, value: &PlaceholderValue, key: &str, queue: Option<&str>) {
        let queue = self.resolve_queue(queue);
        let maxdepth = self.maxdepth;
        self.state_mut(&queue).store.fill(value, key, maxdepth);
    }

    /// Add one placeholder under `key`; nested values flatten below it.
    pub fn set_placeholder(&mut self, key: &str, value: &PlaceholderValue, queue: Option<&str>) {
        self.set_placeholders(value, key, queue);
    }

    pub fn get_placeholder(&self, key: &str, queue: Option<&str>) -> Option<&str> {
        let queue = self.resolve_queue(queue);
        self.queues.get(&queue).and_then(|state| state.store.get(key))
    }

    pub fn get_placeholders(&self, queue: Option<&str>) -> Option<&BTreeMap<String, String>> {
        let queue = self.resolve_queue(queue);
        self.queues.get(&queue).map(|state| state.store.entries())
    }

    pub fn clear_placeholders(&mut self, queue: Option<&str>) {
        let queue = self.resolve_queue(queue);
        if let Some(state) = self.queues.get_mut(&queue) {
            state.store.clear();
        }
    }

    pub fn get_templates(&self, queue: Option<&str>) -> Option<&TemplateTree> {
        let queue = self.resolve_queue(queue);
        self.queues.get(&queue).and_then(|state| state.tree.as_ref())
    }

    pub fn clear_templates(&mut self, queue: Option<&str>) {
        let queue = self.resolve_queue(queue);
        if let Some(state) = self.queues.get_mut(&queue) {
            state.tree = None;
        }
    }

    /// Insert the current row template at `key`, auto-creating every
    /// missing ancestor along the path.
    ///
    /// The leaf's template gets two-phase placeholder treatment: exact tags
    /// named in `placeholders` (or, when `None`, the queue store scoped to
    /// `key.`) are replaced literally, modifier-bearing tags are left for
    /// the substitution engine, and every remaining tag is re-namespaced
    /// with the `key.` prefix so sibling branches cannot collide.
    pub fn prepare_template(
        &mut self,
        key: &str,
        placeholders: Option<&BTreeMap<String, String>>,
        queue: Option<&str>,
    ) {
        let started = self.profile_enabled.then(Instant::now);
        let queue = self.resolve_queue(queue);
        let wrapper = self.wrapper_or_default();
        let tpl = self.tpl.clone();
        let segments: Vec<&str> = key.split('.').collect();

        let state = self.state_mut(&queue);
        let pairs = if tpl.is_empty() {
            BTreeMap::new()
        } else {
            match placeholders {
                Some(map) => map.clone(),
                None => state.store.scoped(key),
            }
        };

        let tree = state
            .tree
            .get_or_insert_with(|| TemplateTree::new(wrapper.clone()));
        let leaf = tree.upsert_path(&segments, &wrapper);

        tree.node_mut(leaf).template = if tpl.is_empty() {
            String::new()
        } else {
            let mut template = tpl;
            for (name, value) in &pairs {
                template = tags::replace_tag(&template, name, value);
            }
            tags::namespace_tags(&template, key)
        };

        if let Some(started) = started {
            state.profile.prepare += started.elapsed();
        }
        debug!("prepared row at '{}' in queue '{}'", key, queue);
    }

    /// Render the queue: sort the tree, join it bottom-up with `separator`,
    /// and hand the result to the substitution engine together with the
    /// queue's store. A queue with no tree yields the empty string without
    /// touching the substitution engine. Unless `clear` is false, the
    /// queue's store and tree are reset afterwards.
    pub fn process(&mut self, queue: Option<&str>, separator: &str, clear: bool) -> String {
        let started = self.profile_enabled.then(Instant::now);
        let queue = self.resolve_queue(queue);

        let flattened = match self.queues.get_mut(&queue) {
            Some(state) => match state.tree.as_mut() {
                Some(tree) if !tree.is_empty() => {
                    tree.sort_recursive();
                    let template = Compositor::new(tree, separator).flatten();
                    Some((template, state.store.entries().clone()))
                }
                _ => None,
            },
            None => None,
        };

        let output = match flattened {
            Some((template, placeholders)) => {
                let output = self.substituter.substitute(&template, &placeholders);
                if self.parse_lazy {
                    tags::unmask_uncached(&output)
                } else {
                    output
                }
            }
            None => String::new(),
        };

        if clear {
            self.clear_placeholders(Some(&queue));
            self.clear_templates(Some(&queue));
        }
        if let Some(started) = started {
            self.state_mut(&queue).profile.render += started.elapsed();
        }
        debug!("processed queue '{}' ({} bytes)", queue, output.len());
        output
    }

    /// Read and reset the queue's profiling buckets. Zero when profiling is
    /// disabled or the queue never rendered.
    pub fn take_profile(&mut self, queue: Option<&str>) -> Profile {
        let queue = self.resolve_queue(queue);
        match self.queues.get_mut(&queue) {
            Some(state) => state.profile.take(),
            None => Profile::default(),
        }
    }

    fn resolve_queue(&self, queue: Option<&str>) -> String {
        match queue {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.queue.clone(),
        }
    }

    fn state_mut(&mut self, queue: &str) -> &mut QueueState {
        self.queues.entry(queue.to_string()).or_default()
    }

    fn masked(&self, tpl: &str) -> String {
        if self.parse_lazy {
            tags::mask_uncached(tpl)
        } else {
            tpl.to_string()
        }
    }

    fn wrapper_or_default(&self) -> String {
        if self.tpl_wrapper.is_empty() {
            tags::WRAPPER_TAG.to_string()
        } else {
            self.tpl_wrapper.clone()
        }
    }
}

impl Default for ChunkEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
