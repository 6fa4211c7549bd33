//! Load units and targets from an XML fleet document
//!
//! ```xml
//! <Fleet>
//!   <Troop><Name>Alpha</Name><RateOfDamage>5</RateOfDamage></Troop>
//!   <Ship id="1"><Strength>20</Strength><TimeLimit>10</TimeLimit></Ship>
//! </Fleet>
//! ```
//!
//! `Troop` and `Ship` elements are collected from anywhere in the document,
//! in document order. The root element name is not checked.

use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashSet;
use std::path::Path;

use crate::core::error::LoadError;
use crate::core::types::{TargetId, UnitId};
use crate::fleet::ordering::urgency_order;
use crate::fleet::targets::Target;
use crate::fleet::units::Unit;

const TROOP: &str = "Troop";
const SHIP: &str = "Ship";

/// Everything a fleet document describes, ready for scheduling
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    /// Units in document order
    pub units: Vec<Unit>,
    /// Targets in urgency order
    pub targets: Vec<Target>,
}

/// Load a fleet from XML text
pub fn load_fleet_str(xml: &str) -> Result<Fleet, LoadError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let units = doc
        .descendants()
        .filter(|n| n.has_tag_name(TROOP))
        .enumerate()
        .map(|(idx, node)| parse_troop(idx, node))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    for node in doc.descendants().filter(|n| n.has_tag_name(SHIP)) {
        let target = parse_ship(node)?;
        if !seen.insert(target.id) {
            return Err(LoadError::DuplicateTarget(target.id));
        }
        targets.push(target);
    }

    tracing::info!(
        units = units.len(),
        targets = targets.len(),
        "fleet document loaded"
    );

    Ok(Fleet {
        units,
        targets: urgency_order(targets),
    })
}

/// Load a fleet from an XML file on disk
pub fn load_fleet_file(path: &Path) -> Result<Fleet, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_fleet_str(&content)
}

fn parse_troop(idx: usize, node: Node) -> Result<Unit, LoadError> {
    let name = child_text(node, TROOP, "Name")?;
    let rate = positive_field(node, TROOP, "RateOfDamage")?;
    Ok(Unit::new(UnitId(idx), name, rate)?)
}

fn parse_ship(node: Node) -> Result<Target, LoadError> {
    let raw_id = node.attribute("id").ok_or(LoadError::MissingAttribute {
        element: SHIP,
        attribute: "id",
    })?;
    let id = parse_integer("id", raw_id)?;
    let strength = positive_field(node, SHIP, "Strength")?;
    let time_limit = positive_field(node, SHIP, "TimeLimit")?;
    Ok(Target::new(TargetId(id), strength, time_limit)?)
}

/// Concatenated text of the first descendant named `element`
fn child_text(
    node: Node,
    parent: &'static str,
    element: &'static str,
) -> Result<String, LoadError> {
    let child = node
        .descendants()
        .find(|n| n.has_tag_name(element))
        .ok_or(LoadError::MissingElement { parent, element })?;

    let text: String = child
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    Ok(text.trim().to_string())
}

fn positive_field(
    node: Node,
    parent: &'static str,
    element: &'static str,
) -> Result<u64, LoadError> {
    let text = child_text(node, parent, element)?;
    let value = parse_integer(element, &text)?;
    u64::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(LoadError::NotPositive {
            field: element,
            value: text,
        })
}

fn parse_integer(field: &'static str, text: &str) -> Result<i64, LoadError> {
    text.trim().parse().map_err(|_| LoadError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}
