use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::domain::entities::{
    CatalogId, Group, GroupId, Handle, Item, ItemId, Node, NodeId, Price,
};
use crate::domain::error::{DomainError, DomainResult};

/// Arena slot: the node payload plus a back-link to its owning group.
#[derive(Debug)]
pub struct TreeNode {
    /// Item or group payload
    pub node: Node,
    /// Owning group, None for detached nodes
    pub parent: Option<GroupId>,
}

/// Arena-backed catalog owning every item and group.
///
/// Nodes are addressed through generational handles: once a subtree is
/// removed, every handle into it resolves to `None`, even if the slot is reused.
/// A node has at most one owning group, which `add` enforces.
/// Handles carry the id of the catalog that issued them and never resolve
/// in another catalog.
#[derive(Debug)]
pub struct Catalog {
    id: CatalogId,
    arena: Arena<TreeNode>,
}

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(0);

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            id: CatalogId(NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed)),
            arena: Arena::new(),
        }
    }

    pub fn id(&self) -> CatalogId {
        self.id
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn new_item(&mut self, name: impl Into<String>, price: impl Into<Price>) -> ItemId {
        let item = Item::new(name, price);
        debug!(item = %item, "new item");
        ItemId(self.insert(Node::Item(item)))
    }

    pub fn new_group(&mut self) -> GroupId {
        GroupId(self.insert(Node::Group(Group::default())))
    }

    /// Creates a group that already owns `first`.
    pub fn new_group_with(&mut self, first: impl Into<NodeId>) -> DomainResult<GroupId> {
        let first = first.into();
        // Checked up front: a failed call must not leave an empty group behind.
        self.ensure_detached(first)?;
        let group = self.new_group();
        self.attach(group, first)?;
        Ok(group)
    }

    fn insert(&mut self, node: Node) -> Handle {
        Handle {
            catalog: self.id,
            index: self.arena.insert(TreeNode { node, parent: None }),
        }
    }

    /// Resolves a handle issued by this catalog whose variant matches the stored node.
    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        if id.handle().catalog != self.id {
            return None;
        }
        self.arena
            .get(id.index())
            .filter(|slot| slot.node.is_composite() == id.is_composite())
    }

    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        if id.handle().catalog != self.id {
            return None;
        }
        self.arena
            .get_mut(id.index())
            .filter(|slot| slot.node.is_composite() == id.is_composite())
    }

    pub fn get(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.get_node(id.into()).map(|n| &n.node)
    }

    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        self.get_node(id.into()).is_some()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.get(id).and_then(Node::as_item)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.get(id).and_then(Node::as_group)
    }

    /// Immediate children in insertion order; None for a stale handle.
    pub fn children(&self, id: GroupId) -> Option<&[NodeId]> {
        self.group(id).map(Group::children)
    }

    pub fn parent(&self, id: impl Into<NodeId>) -> Option<GroupId> {
        self.get_node(id.into()).and_then(|n| n.parent)
    }

    /// True for groups. Decided by the handle, so stale handles still answer.
    pub fn is_composite(&self, id: impl Into<NodeId>) -> bool {
        id.into().is_composite()
    }

    /// Own price for an item, sum over all descendants for a group.
    pub fn price(&self, id: impl Into<NodeId>) -> Option<Price> {
        self.price_of(id.into())
    }

    #[instrument(level = "trace", skip(self))]
    fn price_of(&self, id: NodeId) -> Option<Price> {
        if !self.contains(id) {
            return None;
        }
        Some(
            self.iter(id)
                .filter_map(|(_, _, node)| node.as_item())
                .map(Item::price)
                .sum(),
        )
    }

    /// Appends `child` to `group`; the group takes ownership.
    pub fn add(&mut self, group: GroupId, child: impl Into<NodeId>) -> DomainResult<()> {
        self.attach(group, child.into())
    }

    #[instrument(level = "debug", skip(self))]
    fn attach(&mut self, group: GroupId, child: NodeId) -> DomainResult<()> {
        if self.group(group).is_none() {
            return Err(DomainError::NodeNotFound(group.into()));
        }
        self.ensure_detached(child)?;

        // Walk up from the target group: meeting the child means it is an ancestor.
        let mut cursor = Some(group);
        while let Some(current) = cursor {
            if NodeId::from(current).index() == child.index() {
                return Err(DomainError::CycleDetected { group, child });
            }
            cursor = self.parent(current);
        }

        if let Some(slot) = self.get_node_mut(child) {
            slot.parent = Some(group);
        }
        if let Some(Node::Group(g)) = self.get_node_mut(group.into()).map(|n| &mut n.node) {
            g.children.push(child);
        }
        debug!(%group, %child, "attached");
        Ok(())
    }

    fn ensure_detached(&self, child: NodeId) -> DomainResult<()> {
        match self.get_node(child) {
            None => Err(DomainError::NodeNotFound(child)),
            Some(TreeNode {
                parent: Some(parent),
                ..
            }) => Err(DomainError::AlreadyAttached {
                child,
                parent: *parent,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Unlinks `child` from `group` and releases its whole subtree.
    ///
    /// Returns false, changing nothing, when `child` is not an immediate child.
    pub fn remove(&mut self, group: GroupId, child: impl Into<NodeId>) -> bool {
        self.remove_node(group, child.into())
    }

    #[instrument(level = "debug", skip(self))]
    fn remove_node(&mut self, group: GroupId, child: NodeId) -> bool {
        if !self.unlink(group, child) {
            return false;
        }
        let released = self.release(child);
        debug!(%child, released, "removed subtree");
        true
    }

    /// Unlinks `child` from `group` and hands it back as a detached node.
    ///
    /// The node stays alive and can be added to any group again.
    pub fn detach(&mut self, group: GroupId, child: impl Into<NodeId>) -> bool {
        self.detach_node(group, child.into())
    }

    #[instrument(level = "debug", skip(self))]
    fn detach_node(&mut self, group: GroupId, child: NodeId) -> bool {
        self.unlink(group, child)
    }

    fn unlink(&mut self, group: GroupId, child: NodeId) -> bool {
        let Some(Node::Group(g)) = self.get_node_mut(group.into()).map(|n| &mut n.node) else {
            return false;
        };
        let Some(pos) = g.children.iter().position(|&c| c == child) else {
            return false;
        };
        g.children.remove(pos);
        if let Some(slot) = self.get_node_mut(child) {
            slot.parent = None;
        }
        true
    }

    /// Frees `root` and all its descendants, returning how many slots were released.
    fn release(&mut self, root: NodeId) -> usize {
        let mut released = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(slot) = self.arena.remove(id.index()) {
                if let Node::Group(group) = slot.node {
                    stack.extend(group.children);
                }
                released += 1;
            }
        }
        released
    }

    /// Pre-order traversal of the subtree at `root`, yielding each node with its depth.
    pub fn iter(&self, root: impl Into<NodeId>) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self, root.into())
    }

    /// Number of levels in the subtree: 1 for an item or an empty group, 0 if stale.
    pub fn depth(&self, root: impl Into<NodeId>) -> usize {
        self.depth_of(root.into())
    }

    #[instrument(level = "debug", skip(self))]
    fn depth_of(&self, root: NodeId) -> usize {
        self.iter(root)
            .map(|(_, depth, _)| depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// All items below `root` in pre-order.
    pub fn items(&self, root: impl Into<NodeId>) -> Vec<&Item> {
        self.iter(root)
            .filter_map(|(_, _, node)| node.as_item())
            .collect()
    }
}

pub struct PreOrderIterator<'a> {
    catalog: &'a Catalog,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(catalog: &'a Catalog, root: NodeId) -> Self {
        let stack = if catalog.contains(root) {
            vec![(root, 0)]
        } else {
            Vec::new()
        };
        Self { catalog, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            if let Some(node) = self.catalog.get(id) {
                if let Node::Group(group) = node {
                    // Reverse push keeps insertion order on pop
                    for &child in group.children.iter().rev() {
                        self.stack.push((child, depth + 1));
                    }
                }
                return Some((id, depth, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_removed_subtree_when_looking_up_then_handles_are_stale() {
        let mut catalog = Catalog::new();
        let root = catalog.new_group();
        let inner = catalog.new_group();
        let leaf = catalog.new_item("Chair", 40.0);
        catalog.add(inner, leaf).unwrap();
        catalog.add(root, inner).unwrap();

        assert!(catalog.remove(root, inner));

        assert!(catalog.get(inner).is_none());
        assert!(catalog.get(leaf).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn given_reused_slot_when_looking_up_old_handle_then_none() {
        let mut catalog = Catalog::new();
        let root = catalog.new_group();
        let old = catalog.new_item("Old", 1.0);
        catalog.add(root, old).unwrap();
        catalog.remove(root, old);

        let new = catalog.new_item("New", 2.0);

        assert!(catalog.item(old).is_none());
        assert_eq!(catalog.item(new).map(Item::name), Some("New"));
    }

    #[test]
    fn given_nested_group_when_iterating_then_depths_follow_nesting() {
        let mut catalog = Catalog::new();
        let a = catalog.new_item("a", 1.0);
        let inner = catalog.new_group_with(a).unwrap();
        let root = catalog.new_group_with(inner).unwrap();

        let depths: Vec<usize> = catalog.iter(root).map(|(_, d, _)| d).collect();

        assert_eq!(depths, vec![0, 1, 2]);
        assert_eq!(catalog.depth(root), 3);
    }

    #[test]
    fn given_handle_with_wrong_variant_when_resolving_then_none() {
        let mut catalog = Catalog::new();
        let group = catalog.new_group();
        let mislabeled = NodeId::Item(ItemId(group.0));

        assert!(catalog.get_node(mislabeled).is_none());
        assert!(catalog.contains(group));
    }

    #[test]
    fn given_mislabeled_self_handle_when_adding_then_group_stays_empty() {
        let mut catalog = Catalog::new();
        let group = catalog.new_group();
        let mislabeled = NodeId::Item(ItemId(group.0));

        let result = catalog.add(group, mislabeled);

        assert_eq!(result, Err(DomainError::NodeNotFound(mislabeled)));
        assert_eq!(catalog.children(group), Some(&[][..]));
        assert_eq!(catalog.price(group), Some(Price::ZERO));
    }

    #[test]
    fn given_two_catalogs_when_created_then_ids_differ() {
        assert_ne!(Catalog::new().id(), Catalog::new().id());
    }
}
