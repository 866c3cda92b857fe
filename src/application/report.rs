//! Printing of catalog subtrees and their total price.

use tracing::instrument;

use crate::application::ApplicationResult;
use crate::config::{RenderStyle, Settings};
use crate::domain::{render_listing, Catalog, DomainError, NodeId, TreeNodeConvert};

pub const TOTAL_PRICE_LABEL: &str = "Total price";

/// Renders the subtree at `node` in the configured style.
#[instrument(level = "debug", skip(catalog))]
pub fn render(catalog: &Catalog, node: NodeId, settings: &Settings) -> ApplicationResult<String> {
    let rendered = match settings.style {
        RenderStyle::Plain => render_listing(catalog, node, settings.indent),
        RenderStyle::Tree => catalog.to_tree_string(node).map(|tree| tree.to_string()),
    };
    rendered.ok_or_else(|| DomainError::NodeNotFound(node).into())
}

/// `Total price: <aggregate>` for any node.
pub fn total_price_line(catalog: &Catalog, node: impl Into<NodeId>) -> ApplicationResult<String> {
    let node = node.into();
    let total = catalog
        .price(node)
        .ok_or(DomainError::NodeNotFound(node))?;
    Ok(format!("{TOTAL_PRICE_LABEL}: {total}"))
}

/// Full report: the rendering followed by the total price line.
pub fn render_report(
    catalog: &Catalog,
    node: impl Into<NodeId>,
    settings: &Settings,
) -> ApplicationResult<String> {
    let node = node.into();
    let mut report = render_block(catalog, node, settings)?;
    report.push_str(&total_price_line(catalog, node)?);
    report.push('\n');
    Ok(report)
}

/// Writes the rendering of `node` to stdout.
pub fn print(catalog: &Catalog, node: impl Into<NodeId>, settings: &Settings) -> ApplicationResult<()> {
    print!("{}", render_block(catalog, node.into(), settings)?);
    Ok(())
}

/// Writes `Total price: <aggregate>` to stdout.
pub fn print_total_price(catalog: &Catalog, node: impl Into<NodeId>) -> ApplicationResult<()> {
    println!("{}", total_price_line(catalog, node)?);
    Ok(())
}

/// Rendering with a guaranteed trailing newline.
fn render_block(catalog: &Catalog, node: NodeId, settings: &Settings) -> ApplicationResult<String> {
    let mut body = render(catalog, node, settings)?;
    if !body.ends_with('\n') {
        body.push('\n');
    }
    Ok(body)
}
