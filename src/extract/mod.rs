//! Turns parsed INSERT statements into plain table/column/row records.

pub mod cell;
pub mod legacy;

use crate::*;
use sqlparser::ast::{Ident, Statement};

/// How columns and rows are pulled out of an INSERT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Rows and cells come from the parser's own row lists and literals.
    #[default]
    Structured,
    /// Rows and cells are re-split from the rendered SQL text on `),` and `,`.
    /// Kept for byte-compatible output with older seeders; values holding
    /// commas or quotes come out mangled.
    Legacy,
}

/// Everything one INSERT statement says about its table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableInsertRecord {
    /// `None` when the statement has no resolvable target name.
    pub table_name: Option<String>,
    pub columns: Vec<String>,
    /// One entry per row tuple, positionally aligned with `columns`.
    pub values: Vec<Vec<String>>,
}

/// Extract the record of an INSERT statement. Other statements yield `None`.
///
/// Shapes the extractor does not recognise degrade to empty fields instead of
/// failing: no name gives `table_name: None`, no column list gives empty
/// `columns`, an `INSERT ... SELECT` gives no `values`.
pub fn extract(statement: &Statement, mode: ExtractMode) -> Option<TableInsertRecord> {
    let Statement::Insert(insert) = statement else {
        return None;
    };

    let mut record = TableInsertRecord::default();
    let (mut has_columns, mut has_values) = (false, false);

    for node in Node::children(insert) {
        match node {
            Node::Name(_) if record.table_name.is_none() => {
                record.table_name = node.name();
            }
            Node::Columns { columns, .. } if !has_columns => {
                has_columns = true;
                record.columns = match mode {
                    ExtractMode::Structured => columns.iter().map(column_name).collect(),
                    ExtractMode::Legacy => legacy::split_columns(&node.text()),
                };
            }
            Node::Values(values) if !has_values => {
                has_values = true;
                record.values = match mode {
                    ExtractMode::Structured => values
                        .rows
                        .iter()
                        .map(|row| row.iter().map(cell::cell_text).collect())
                        .collect(),
                    ExtractMode::Legacy => legacy::split_values(&node.text()),
                };
            }
            _ => {}
        }
    }

    debug!(
        "Extracted {} rows x {} columns for table {:?}",
        record.values.len(),
        record.columns.len(),
        record.table_name
    );
    Some(record)
}

fn column_name(ident: &Ident) -> String {
    ident.value.trim().replace('`', "")
}
