crate::reexport!(schema);
crate::reexport!(table);

use crate::*;
use sqlparser::ast::Statement;

/// Extract every INSERT of the script and group the records by table, in the
/// order tables first appear.
///
/// An INSERT without a column list borrows the columns of a `CREATE TABLE`
/// for the same table found anywhere in the script.
pub fn group_inserts(statements: &[Statement], mode: ExtractMode) -> Vec<TableGroup> {
    let catalog = SchemaCatalog::from_statements(statements);
    if !catalog.is_empty() {
        debug!("Schema known for {} tables", catalog.len());
    }
    let mut groups: Vec<TableGroup> = Vec::new();

    for mut record in statements.iter().filter_map(|s| extract(s, mode)) {
        let name = record.table_name.clone().unwrap_or_default();
        if record.columns.is_empty() {
            if let Some(columns) = catalog.columns(&name) {
                debug!("Using CREATE TABLE columns for INSERT into {name}");
                record.columns = columns.to_vec();
            }
        }

        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.records.push(record),
            None => groups.push(TableGroup::new(name, record)),
        }
    }

    debug!("Found INSERT data for {} tables", groups.len());
    groups
}
