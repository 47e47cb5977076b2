// ABOUTME: Bottom-up compositor joining the template tree into one string
// ABOUTME: Children are joined in key order, wrapped, then spliced into parents

use crate::subst::tags;

use super::arena::{NodeId, TemplateTree};

/// Flattens a sorted template tree into a single linear template string.
pub struct Compositor<'a> {
    tree: &'a TemplateTree,
    separator: &'a str,
}

impl<'a> Compositor<'a> {
    pub fn new(tree: &'a TemplateTree, separator: &'a str) -> Self {
        Self { tree, separator }
    }

    /// Concatenate the renderings of all first-level nodes in key order.
    /// The root's wrapper is not applied at the top level.
    pub fn flatten(&self) -> String {
        let root = self.tree.node(TemplateTree::ROOT);
        let parts: Vec<String> = root
            .children()
            .iter()
            .map(|(key, &child)| self.render_node(child, key))
            .collect();
        parts.join(self.separator)
    }

    fn render_node(&self, id: NodeId, path: &str) -> String {
        let node = self.tree.node(id);
        if node.is_leaf() {
            return node.template.clone();
        }

        let parts: Vec<String> = node
            .children()
            .iter()
            .map(|(key, &child)| self.render_node(child, &format!("{path}.{key}")))
            .collect();
        let joined = parts.join(self.separator);

        let wrapped = node.wrapper.replace(tags::WRAPPER_TAG, &joined);
        tags::replace_tag(&node.template, path, &wrapped)
    }
}
