//! Laravel seeder rendering: one `Model::create([...]);` call per row.

crate::reexport!(php_value);
crate::reexport!(class_name);
crate::reexport!(render_tests, test);

use crate::*;

/// What to do with a row whose values cannot be coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RowErrorPolicy {
    /// Stop the run; the table's file is not written.
    #[default]
    Abort,
    /// Log the row and leave it out of the file.
    Skip,
}

/// Render one row as a `create` call. Cells past the end of `columns` are
/// dropped.
pub fn render(class_name: &str, columns: &[String], row: &[String]) -> Result<String> {
    let mut out = format!("{class_name}::create([\n");
    for (column, value) in columns.iter().zip(row) {
        let value = PhpValue::coerce(column, value)?;
        out.push_str(&format!("\t'{column}' => {value},\n"));
    }
    out.push_str("]);\n\n");
    Ok(out)
}

/// Renders whole seeder files for one model class.
#[derive(Debug, Clone)]
pub struct Seeder<'a> {
    pub class_name: &'a str,
    pub namespace: &'a str,
}

impl<'a> Seeder<'a> {
    pub fn new(class_name: &'a str, namespace: &'a str) -> Self {
        Self {
            class_name,
            namespace,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.php", self.class_name)
    }

    pub fn header(&self) -> String {
        let namespace = self.namespace.trim_end_matches('\\');
        format!("<?php\n\nuse {namespace}\\{};\n\n", self.class_name)
    }

    /// Full file content for every row of `group`.
    ///
    /// The content is built in memory, so an aborting coercion error leaves
    /// nothing half-written on disk.
    pub fn render_group(&self, group: &TableGroup, policy: RowErrorPolicy) -> Result<String> {
        let mut out = self.header();
        let mut skipped = 0usize;

        for (index, (columns, row)) in group.rows().enumerate() {
            match render(self.class_name, columns, row) {
                Ok(call) => out.push_str(&call),
                Err(err) if policy == RowErrorPolicy::Skip => {
                    warn!("Skipping row {index} of table {}: {err}", group.name);
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        if skipped > 0 {
            info!(
                "Rendered {} of {} rows for {}",
                group.row_count() - skipped,
                group.row_count(),
                self.class_name
            );
        }
        Ok(out)
    }
}
