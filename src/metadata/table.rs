use super::*;

/// All INSERT records targeting one table, in statement order.
///
/// A dump may split a large table over several INSERT statements; they end
/// up in one seeder file. Records keep their own column lists since nothing
/// guarantees the statements agree on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    /// Table name, empty when the INSERT had no resolvable name.
    pub name: String,
    pub records: Vec<TableInsertRecord>,
}

impl TableGroup {
    pub fn new(name: impl Into<String>, first: TableInsertRecord) -> Self {
        Self {
            name: name.into(),
            records: vec![first],
        }
    }

    /// Columns of the first record, which is what gets shown to the user.
    pub fn columns(&self) -> &[String] {
        self.records
            .first()
            .map(|record| record.columns.as_slice())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.records.iter().map(|record| record.values.len()).sum()
    }

    /// Every `(columns, row)` pair of the group, in order.
    pub fn rows(&self) -> impl Iterator<Item = (&[String], &[String])> {
        self.records.iter().flat_map(|record| {
            record
                .values
                .iter()
                .map(|row| (record.columns.as_slice(), row.as_slice()))
        })
    }
}
