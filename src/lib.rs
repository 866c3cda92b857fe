//! Furniture and equipment price catalog.
//!
//! Items and groups of items live in one arena-backed [`domain::Catalog`] and
//! are handled uniformly: both report an aggregate price and both render as text.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{print, print_total_price};
pub use domain::{Catalog, GroupId, Item, ItemId, Node, NodeId, Price};
