//! Tests for listing, tree rendering and total price reporting

use pricetree::application::{render, render_report, total_price_line};
use pricetree::config::{RenderStyle, Settings};
use pricetree::domain::{render_listing, Catalog, GroupId, NodeId, TreeNodeConvert};
use pricetree::util::testing;

fn reception() -> (Catalog, GroupId) {
    testing::init_test_setup();
    let mut catalog = Catalog::new();
    let group = catalog.new_group();
    let design = catalog.new_item("Warm color design", 500.0);
    let table = catalog.new_item("Magazine table", 200.0);
    catalog.add(group, design).unwrap();
    catalog.add(group, table).unwrap();
    (catalog, group)
}

#[test]
fn given_group_of_two_items_when_rendering_then_count_then_items() {
    let (catalog, group) = reception();

    let listing = render_listing(&catalog, group.into(), 0).unwrap();

    assert_eq!(
        listing,
        "Composite (2):\nWarm color design: 500\nMagazine table: 200\n"
    );
}

#[test]
fn given_group_when_rendering_then_first_line_matches_child_count() {
    let (mut catalog, group) = reception();
    let extra = catalog.new_item("Water cooler", 400.0);
    catalog.add(group, extra).unwrap();

    let listing = render_listing(&catalog, group.into(), 0).unwrap();

    assert_eq!(listing.lines().next(), Some("Composite (3):"));
}

#[test]
fn given_group_when_rendering_twice_then_identical() {
    let (catalog, group) = reception();

    let first = render_listing(&catalog, group.into(), 2);
    let second = render_listing(&catalog, group.into(), 2);

    assert_eq!(first, second);
}

#[test]
fn given_removed_child_when_rendering_then_child_is_absent() {
    let (mut catalog, group) = reception();
    let first: NodeId = catalog.children(group).unwrap()[0];

    assert!(catalog.remove(group, first));
    let listing = render_listing(&catalog, group.into(), 0).unwrap();

    assert_eq!(listing, "Composite (1):\nMagazine table: 200\n");
}

#[test]
fn given_non_member_removed_when_rendering_then_output_unchanged() {
    let (mut catalog, group) = reception();
    let before = render_listing(&catalog, group.into(), 0);
    let stranger = catalog.new_item("Stranger", 1.0);

    assert!(!catalog.remove(group, stranger));

    assert_eq!(render_listing(&catalog, group.into(), 0), before);
}

#[test]
fn given_empty_group_when_rendering_then_only_heading() {
    let mut catalog = Catalog::new();
    let group = catalog.new_group();

    let listing = render_listing(&catalog, group.into(), 0).unwrap();

    assert_eq!(listing, "Composite (0):\n");
}

#[test]
fn given_group_when_converting_to_tree_then_labels_carry_prices() {
    let (catalog, group) = reception();

    let tree = catalog.to_tree_string(group.into()).unwrap();

    assert_eq!(tree.root, "Composite (2): 700");
    let leaves: Vec<&str> = tree.leaves.iter().map(|t| t.root.as_str()).collect();
    assert_eq!(leaves, vec!["Warm color design: 500", "Magazine table: 200"]);
}

#[test]
fn given_tree_style_when_rendering_then_box_drawing_output() {
    let (catalog, group) = reception();
    let settings = Settings {
        style: RenderStyle::Tree,
        indent: 0,
    };

    let rendered = render(&catalog, group.into(), &settings).unwrap();

    assert_eq!(rendered.lines().next(), Some("Composite (2): 700"));
    assert!(rendered.contains("── Warm color design: 500"));
    assert!(rendered.contains("── Magazine table: 200"));
}

#[test]
fn given_any_node_when_building_total_line_then_fixed_label() {
    let (catalog, group) = reception();
    let item = catalog.children(group).unwrap()[1];

    assert_eq!(
        total_price_line(&catalog, group).unwrap(),
        "Total price: 700"
    );
    assert_eq!(total_price_line(&catalog, item).unwrap(), "Total price: 200");
}

#[test]
fn given_default_settings_when_rendering_report_then_listing_then_total() {
    let (catalog, group) = reception();

    let report = render_report(&catalog, group, &Settings::default()).unwrap();

    assert_eq!(
        report,
        "Composite (2):\nWarm color design: 500\nMagazine table: 200\nTotal price: 700\n"
    );
}

#[test]
fn given_stale_node_when_reporting_then_errors() {
    let (mut catalog, group) = reception();
    let wrapper = catalog.new_group();
    catalog.add(wrapper, group).unwrap();
    catalog.remove(wrapper, group);

    assert!(render_report(&catalog, group, &Settings::default()).is_err());
    assert!(total_price_line(&catalog, group).is_err());
}

#[test]
fn given_group_when_printing_to_stdout_then_succeeds() {
    let (catalog, group) = reception();

    pricetree::print(&catalog, group, &Settings::default()).unwrap();
    pricetree::print_total_price(&catalog, group).unwrap();
}
