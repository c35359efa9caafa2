use super::*;
use std::collections::HashMap;

/// Column order of every `CREATE TABLE` seen in a script, keyed by the
/// unquoted table name.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    tables: HashMap<String, Vec<String>>,
}

impl SchemaCatalog {
    pub fn from_statements(statements: &[Statement]) -> Self {
        let mut catalog = Self::default();
        for statement in statements {
            if let Statement::CreateTable(create) = statement {
                let Some(name) = create
                    .name
                    .0
                    .last()
                    .and_then(|part| part.as_ident())
                    .map(|ident| ident.value.clone())
                else {
                    continue;
                };
                let columns = create
                    .columns
                    .iter()
                    .map(|column| column.name.value.clone())
                    .collect();
                trace!("Schema for {name}: {columns:?}");
                catalog.tables.insert(name, columns);
            }
        }
        catalog
    }

    /// Columns of `table`, falling back to a case-insensitive match since
    /// dumps are not always consistent about table name casing.
    pub fn columns(&self, table: &str) -> Option<&[String]> {
        self.tables
            .get(table)
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(table))
                    .map(|(_, columns)| columns)
            })
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
