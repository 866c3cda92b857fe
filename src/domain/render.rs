/*
Two renderings of the same subtree:
- listing: one line per node in pre-order, groups as `Composite (n):`, items as `name: price`
- termtree: box-drawing tree, group labels carry their aggregate price
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::Catalog;
use crate::domain::entities::{Node, NodeId};

/// Flat listing of the subtree at `root`, indented by `indent` spaces per level.
///
/// Every line, including the last, ends with a newline. Returns None for a stale root.
#[instrument(level = "debug", skip(catalog))]
pub fn render_listing(catalog: &Catalog, root: NodeId, indent: usize) -> Option<String> {
    if !catalog.contains(root) {
        return None;
    }
    let mut out = String::new();
    for (_, depth, node) in catalog.iter(root) {
        out.push_str(&" ".repeat(indent * depth));
        match node {
            Node::Item(item) => out.push_str(&item.to_string()),
            Node::Group(group) => {
                out.push_str(&group.heading());
                out.push(':');
            }
        }
        out.push('\n');
    }
    Some(out)
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: NodeId) -> Option<Tree<String>>;
}

impl TreeNodeConvert for Catalog {
    /// Builds the tree bottom-up from the pre-order walk, so nesting depth
    /// never grows the call stack.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: NodeId) -> Option<Tree<String>> {
        let nodes: Vec<(NodeId, usize, &Node)> = self.iter(root).collect();
        // Finished subtrees with their depth; the nearest sibling is on top.
        let mut done: Vec<(usize, Tree<String>)> = Vec::new();
        for &(id, depth, node) in nodes.iter().rev() {
            let tree = match node {
                Node::Item(item) => Tree::new(item.to_string()),
                Node::Group(group) => {
                    let mut leaves = Vec::with_capacity(group.len());
                    while done.last().is_some_and(|(d, _)| *d == depth + 1) {
                        if let Some((_, leaf)) = done.pop() {
                            leaves.push(leaf);
                        }
                    }
                    let label =
                        format!("{}: {}", group.heading(), self.price(id).unwrap_or_default());
                    Tree::new(label).with_leaves(leaves)
                }
            };
            done.push((depth, tree));
        }
        done.pop().map(|(_, tree)| tree)
    }
}
