//! Domain entities: prices, catalog items and node handles

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use generational_arena::Index;

/// Monetary amount of a catalog entry.
///
/// No sign or finiteness checks: aggregation is plain floating point addition.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Shortest round-trip form: `500.0` prints as `500`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal priced entry (leaf of the catalog tree).
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    price: Price,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

/// Composite entry: an ordered list of owned children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub(crate) children: Vec<NodeId>,
}

impl Group {
    /// Immediate children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Heading line used by every rendering of a group.
    pub fn heading(&self) -> String {
        format!("Composite ({})", self.children.len())
    }
}

/// Closed set of node variants stored in a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Item(Item),
    Group(Group),
}

impl Node {
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Node::Item(item) => Some(item),
            Node::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            Node::Item(_) => None,
        }
    }
}

/// Identity of the catalog that issued a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogId(pub(crate) u64);

/// Arena slot index tagged with its issuing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) catalog: CatalogId,
    pub(crate) index: Index,
}

/// Handle to an item. Items cannot own children, so this handle is never
/// accepted where a group is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub(crate) Handle);

/// Handle to a group; the only handle accepted by the mutation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) Handle);

/// Handle to any node in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Item(ItemId),
    Group(GroupId),
}

impl NodeId {
    pub(crate) fn handle(self) -> Handle {
        match self {
            NodeId::Item(ItemId(handle)) | NodeId::Group(GroupId(handle)) => handle,
        }
    }

    /// Slot identity regardless of the handle variant.
    pub(crate) fn index(self) -> Index {
        self.handle().index
    }

    pub fn is_composite(self) -> bool {
        matches!(self, NodeId::Group(_))
    }

    pub fn as_group(self) -> Option<GroupId> {
        match self {
            NodeId::Group(id) => Some(id),
            NodeId::Item(_) => None,
        }
    }
}

impl From<ItemId> for NodeId {
    fn from(id: ItemId) -> Self {
        NodeId::Item(id)
    }
}

impl From<GroupId> for NodeId {
    fn from(id: GroupId) -> Self {
        NodeId::Group(id)
    }
}

fn fmt_handle(f: &mut fmt::Formatter<'_>, kind: &str, handle: Handle) -> fmt::Result {
    let (slot, generation) = handle.index.into_raw_parts();
    write!(f, "{kind}#{}:{slot}.{generation}", handle.catalog.0)
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle(f, "item", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle(f, "group", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Item(id) => fmt::Display::fmt(id, f),
            NodeId::Group(id) => fmt::Display::fmt(id, f),
        }
    }
}
