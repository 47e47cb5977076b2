// ABOUTME: Arena-backed template tree addressed by dot-path keys
// ABOUTME: Provides upsert-by-path auto-creation and recursive key sorting

use indexmap::IndexMap;

use crate::subst::tags;

/// Stable identifier of a node inside its tree's arena.
pub type NodeId = usize;

/// One position in the template tree: a row template, the wrapper enclosing
/// this node's joined children, and the ordered child map.
#[derive(Debug, Clone)]
pub struct TemplateNode {
    pub template: String,
    pub wrapper: String,
    children: IndexMap<String, NodeId>,
}

impl TemplateNode {
    fn new(template: String, wrapper: String) -> Self {
        Self {
            template,
            wrapper,
            children: IndexMap::new(),
        }
    }

    pub fn children(&self) -> &IndexMap<String, NodeId> {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Per-queue tree of template nodes. Nodes live in an arena and are
/// addressed by id; the root (id 0) exists from construction and carries no
/// renderable template of its own.
#[derive(Debug, Clone)]
pub struct TemplateTree {
    nodes: Vec<TemplateNode>,
}

impl TemplateTree {
    pub const ROOT: NodeId = 0;

    pub fn new(root_wrapper: impl Into<String>) -> Self {
        Self {
            nodes: vec![TemplateNode::new(String::new(), root_wrapper.into())],
        }
    }

    pub fn node(&self, id: NodeId) -> &TemplateNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TemplateNode {
        &mut self.nodes[id]
    }

    /// True when no row has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.nodes[Self::ROOT].children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walk `segments` from the root, creating every missing node along the
    /// way, and return the leaf's id. Auto-created nodes get `wrapper` and a
    /// default row template naming their own full key-path, so a group with
    /// no explicit row still resolves to whatever its children render to.
    /// Existing nodes (templates and children) are left untouched.
    pub fn upsert_path(&mut self, segments: &[&str], wrapper: &str) -> NodeId {
        let mut current = Self::ROOT;
        let mut path = String::new();

        for segment in segments {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);

            current = match self.nodes[current].children.get(*segment) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TemplateNode::new(
                        tags::placeholder_tag(&path),
                        wrapper.to_string(),
                    ));
                    self.nodes[current]
                        .children
                        .insert(segment.to_string(), child);
                    child
                }
            };
        }
        current
    }

    /// Sort every node's children by key, deepest first, so rendering order
    /// is independent of insertion order.
    pub fn sort_recursive(&mut self) {
        self.sort_node(Self::ROOT);
    }

    fn sort_node(&mut self, id: NodeId) {
        let child_ids: Vec<NodeId> = self.nodes[id].children.values().copied().collect();
        for child in child_ids {
            self.sort_node(child);
        }
        self.nodes[id].children.sort_keys();
    }
}
