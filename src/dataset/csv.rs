//! CSV dataset ingestion (`spec.md` §6): no quoting or escaping, a header
//! row of attribute names, and one row per instance with the class label
//! in the last column.

use std::fs;
use std::path::Path;

use crate::error::{Result, RipperError};
use crate::instance::{Attribute, Instance};
use crate::value::{AttributeType, AttributeValue};

/// A cell is continuous iff the *entire* trimmed token parses as an
/// `f64` — no partial-prefix parsing. `original_source` uses `std::stof`,
/// which happily parses `"12abc"` as `12.0` and drops the suffix; this
/// is stricter on purpose (`spec.md` §6).
fn infer_value(cell: &str) -> AttributeValue {
    match cell.trim().parse::<f64>() {
        Ok(v) => AttributeValue::Continuous(v),
        Err(_) => AttributeValue::Discrete(cell.to_string()),
    }
}

fn type_name(t: AttributeType) -> &'static str {
    match t {
        AttributeType::Discrete => "discrete",
        AttributeType::Continuous => "continuous",
    }
}

/// Parse an in-memory CSV document into instances.
///
/// A name is bound to exactly one type, taken from its first non-empty
/// observation across the whole dataset (`spec.md` §3); every later cell
/// for that name must agree, or the row is rejected outright rather than
/// silently mixing tags under one attribute name.
pub fn parse(contents: &str) -> Result<Vec<Instance>> {
    let mut lines = contents.lines();

    let header = lines
        .next()
        .ok_or_else(|| RipperError::MalformedDataset { line: 0, reason: "empty file, no header row".to_string() })?;
    let attr_names: Vec<&str> = header.split(',').collect();
    if attr_names.len() < 2 {
        return Err(RipperError::MalformedDataset {
            line: 1,
            reason: "header must name at least one attribute plus the class column".to_string(),
        });
    }
    let feature_count = attr_names.len() - 1;

    let rows: Vec<(usize, &str)> = lines
        .enumerate()
        .map(|(offset, line)| (offset + 2, line)) // 1 for the header, 1 for 1-based numbering
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let mut column_types: Vec<Option<AttributeType>> = vec![None; feature_count];
    for (line_no, line) in &rows {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != attr_names.len() {
            return Err(RipperError::MalformedDataset {
                line: *line_no,
                reason: format!("expected {} columns, found {}", attr_names.len(), cells.len()),
            });
        }

        for (i, cell) in cells[..feature_count].iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let inferred = infer_value(cell).attribute_type();
            match column_types[i] {
                None => column_types[i] = Some(inferred),
                Some(bound) if bound != inferred => {
                    return Err(RipperError::MalformedDataset {
                        line: *line_no,
                        reason: format!(
                            "attribute '{}' was first seen as {} but this value is {}",
                            attr_names[i],
                            type_name(bound),
                            type_name(inferred)
                        ),
                    });
                }
                _ => {}
            }
        }
    }

    let mut dataset = Vec::new();
    for (line_no, line) in rows {
        let cells: Vec<&str> = line.split(',').collect();
        let (feature_cells, class_cell) = cells.split_at(feature_count);
        let class_cell = class_cell[0];
        if class_cell.is_empty() {
            return Err(RipperError::MalformedDataset { line: line_no, reason: "class column is empty".to_string() });
        }

        let mut attributes = Vec::new();
        for (name, cell) in attr_names[..feature_count].iter().zip(feature_cells) {
            if cell.is_empty() {
                continue;
            }
            let value = infer_value(cell);
            attributes.push(Attribute { name: name.to_string(), attr_type: value.attribute_type(), value });
        }

        dataset.push(Instance { class: class_cell.to_string(), attributes });
    }

    Ok(dataset)
}

/// Read and parse a CSV dataset from `path`.
pub fn read(path: &Path) -> Result<Vec<Instance>> {
    let contents = fs::read_to_string(path).map_err(|_| RipperError::MissingDataset(path.to_path_buf()))?;
    parse(&contents)
}
