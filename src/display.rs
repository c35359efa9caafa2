//! Terminal screens, formatted for an explicit width so they can be tested
//! without a terminal.

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
}

impl Layout {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn separator(&self) -> String {
        "-".repeat(self.width)
    }

    /// `text` padded on the left so it sits in the middle of the line.
    pub fn centered(&self, text: &str) -> String {
        let padding = self.width.saturating_sub(text.chars().count()) / 2;
        format!("{}{text}", " ".repeat(padding))
    }

    /// `left` and `right` joined by as many dots as fit in the line.
    pub fn tabulated(&self, left: &str, right: &str) -> String {
        let used = left.chars().count() + right.chars().count();
        format!("{left}{}{right}", ".".repeat(self.width.saturating_sub(used)))
    }

    /// A centered title between two separators.
    pub fn banner(&self, title: &str) -> Vec<String> {
        vec![self.separator(), self.centered(title), self.separator()]
    }

    /// Overview of every table found in the dump with its index.
    pub fn table_list(&self, groups: &[TableGroup]) -> Vec<String> {
        let mut lines = self.banner("SQL Table Definitions");
        lines.extend(groups.iter().enumerate().map(|(index, group)| {
            let name = if group.name.is_empty() {
                "(unnamed)"
            } else {
                group.name.as_str()
            };
            self.tabulated(name, &index.to_string())
        }));
        lines
    }

    /// Header and column listing shown before a table is converted.
    pub fn table_detail(&self, group: &TableGroup, class_name: &str) -> Vec<String> {
        let mut lines = self.banner(&format!(
            "Table: {} (PHP Class: {class_name})",
            group.name
        ));
        lines.extend(
            group
                .columns()
                .iter()
                .enumerate()
                .map(|(position, column)| self.tabulated(column, &position.to_string())),
        );
        lines.push(self.separator());
        lines
    }

    pub fn file_created(&self, file_name: &str) -> Vec<String> {
        vec![
            self.centered(&format!("File {file_name} created.")),
            self.separator(),
        ]
    }
}
