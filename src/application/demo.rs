//! Hardcoded school furnishing catalog used by the binary.

use tracing::{debug, instrument};

use crate::domain::{Catalog, DomainResult, GroupId};

/// Builds the demo catalog and returns it with its root group.
///
/// Root holds, in order: reception, classroom 1, classroom 2, computer lab.
#[instrument(level = "debug")]
pub fn demo_catalog() -> DomainResult<(Catalog, GroupId)> {
    let mut c = Catalog::new();

    let reception = c.new_group();
    let item = c.new_item("Warm color design", 500.0);
    c.add(reception, item)?;
    let item = c.new_item("Magazine table", 200.0);
    c.add(reception, item)?;
    let desk = c.new_item("Secretary desk", 800.0);
    let secretary = c.new_group_with(desk)?;
    let item = c.new_item("Computer", 1500.0);
    c.add(secretary, item)?;
    let item = c.new_item("Office supplies", 100.0);
    c.add(secretary, item)?;
    c.add(reception, secretary)?;
    let item = c.new_item("Water cooler", 400.0);
    c.add(reception, item)?;

    let classroom1 = c.new_group();
    let item = c.new_item("10 desks", 1500.0);
    c.add(classroom1, item)?;
    let item = c.new_item("Whiteboard", 100.0);
    c.add(classroom1, item)?;
    let desk = c.new_item("Teacher desk", 500.0);
    let teacher_desk = c.new_group_with(desk)?;
    let item = c.new_item("Computer", 1500.0);
    c.add(teacher_desk, item)?;
    c.add(classroom1, teacher_desk)?;
    let item = c.new_item("Mathematician posters", 50.0);
    c.add(classroom1, item)?;

    let classroom2 = c.new_group();
    let desks = c.new_item("20 black desks", 2000.0);
    let black_desks = c.new_group_with(desks)?;
    let item = c.new_item("Desks arranged in oval/circle", 300.0);
    c.add(black_desks, item)?;
    c.add(classroom2, black_desks)?;
    let item = c.new_item("Whiteboard", 100.0);
    c.add(classroom2, item)?;
    let item = c.new_item("Soft sofa", 500.0);
    c.add(classroom2, item)?;

    let computer_lab = c.new_group();
    let desks = c.new_item("10 computer desks", 3000.0);
    let computer_desks = c.new_group_with(desks)?;
    let unit = c.new_item("Computer", 1500.0);
    let computer = c.new_group_with(unit)?;
    for (name, price) in [
        ("2.2 GHz processor", 500.0),
        ("80 GB hard", 1000.0),
        ("8 GB RAM", 200.0),
    ] {
        let part = c.new_item(name, price);
        c.add(computer, part)?;
    }
    c.add(computer_desks, computer)?;
    c.add(computer_lab, computer_desks)?;
    let item = c.new_item("Whiteboard", 100.0);
    c.add(computer_lab, item)?;

    let root = c.new_group();
    for area in [reception, classroom1, classroom2, computer_lab] {
        c.add(root, area)?;
    }

    debug!(nodes = c.len(), "demo catalog built");
    Ok((c, root))
}
