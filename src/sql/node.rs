//! Tagged view over the immediate children of an INSERT statement.
//!
//! `sqlparser` hands back a fully typed `Insert`. The extractor, however,
//! thinks in terms of the three shapes an `INSERT INTO t (a, b) VALUES ...`
//! is made of: the target name, the function-call-like column list, and the
//! VALUES clause. `Node` names exactly those shapes so the extractor can do a
//! single `match` instead of poking at AST fields in several places.
//!
//! Each node also exposes its raw textual form (`text`), which is what the
//! legacy splitting mode operates on.

use itertools::Itertools;
use sqlparser::ast::{Ident, Insert, ObjectName, SetExpr, TableObject, Values};

/// One child of an INSERT statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// Bare named reference: the table rows are inserted into.
    Name(&'a ObjectName),
    /// `table (col, ...)`: the explicit column list, tied to its table.
    Columns {
        table: Option<&'a ObjectName>,
        columns: &'a [Ident],
    },
    /// The `VALUES (...), (...)` clause.
    Values(&'a Values),
    /// Anything else (table functions, `INSERT ... SELECT` sources, ...).
    Other,
}

impl<'a> Node<'a> {
    /// Children of `insert` in source order. The column list is only present
    /// when the statement spells one out.
    pub fn children(insert: &'a Insert) -> Vec<Node<'a>> {
        let table = match &insert.table {
            TableObject::TableName(name) => Some(name),
            _ => None,
        };

        let mut nodes = Vec::with_capacity(3);
        nodes.push(table.map_or(Node::Other, Node::Name));
        if !insert.columns.is_empty() {
            nodes.push(Node::Columns {
                table,
                columns: &insert.columns,
            });
        }
        if let Some(source) = &insert.source {
            nodes.push(match source.body.as_ref() {
                SetExpr::Values(values) => Node::Values(values),
                _ => Node::Other,
            });
        }
        nodes
    }

    /// Resolvable name of a `Name` node: the last part of a possibly
    /// qualified name, without quoting.
    pub fn name(&self) -> Option<String> {
        match self {
            Node::Name(name) => name
                .0
                .last()
                .and_then(|part| part.as_ident())
                .map(|ident| ident.value.clone()),
            _ => None,
        }
    }

    /// Raw SQL text of the node, rendered by the parser.
    pub fn text(&self) -> String {
        match self {
            Node::Name(name) => name.to_string(),
            Node::Columns { table, columns } => {
                let table = table.map(ToString::to_string).unwrap_or_default();
                format!("{table} ({})", columns.iter().join(", "))
            }
            Node::Values(values) => values.to_string(),
            Node::Other => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use sqlparser::ast::Statement;

    fn insert(sql: &str) -> Insert {
        let mut statements = parse_script(sql, SqlDialect::MySql).expect("insert should parse");
        match statements.remove(0) {
            Statement::Insert(insert) => insert,
            other => panic!("expected an INSERT, got {other:?}"),
        }
    }

    #[test]
    fn children_follow_source_order() {
        let insert = insert("INSERT INTO `users` (`id`, `name`) VALUES (1, 'Alice')");
        let nodes = Node::children(&insert);
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[0], Node::Name(_)), "{nodes:?}");
        assert!(matches!(nodes[1], Node::Columns { .. }), "{nodes:?}");
        assert!(matches!(nodes[2], Node::Values(_)), "{nodes:?}");
    }

    #[test]
    fn column_list_is_absent_without_explicit_columns() {
        let insert = insert("INSERT INTO users VALUES (1, 'Alice')");
        let nodes = Node::children(&insert);
        assert!(!nodes.iter().any(|n| matches!(n, Node::Columns { .. })));
        assert!(nodes.iter().any(|n| matches!(n, Node::Values(_))));
    }

    #[test]
    fn select_source_is_other() {
        let insert = insert("INSERT INTO archive (id) SELECT id FROM users");
        let nodes = Node::children(&insert);
        assert!(!nodes.iter().any(|n| matches!(n, Node::Values(_))));
        assert_eq!(nodes.last(), Some(&Node::Other));
    }

    #[rstest]
    #[case("INSERT INTO `users` (id) VALUES (1)", "users")]
    #[case("INSERT INTO shop.orders (id) VALUES (1)", "orders")]
    #[case("INSERT INTO `shop`.`order_items` (id) VALUES (1)", "order_items")]
    fn name_is_unquoted_last_part(#[case] sql: &str, #[case] expected: &str) {
        let insert = insert(sql);
        let name = Node::children(&insert)
            .iter()
            .find_map(Node::name)
            .expect("name node should resolve");
        assert_eq!(name, expected);
    }

    #[test]
    fn text_keeps_quoting() {
        let insert = insert("INSERT INTO `users` (`id`, `name`) VALUES (1, 'Alice')");
        let nodes = Node::children(&insert);
        assert_eq!(nodes[0].text(), "`users`");
        assert_eq!(nodes[1].text(), "`users` (`id`, `name`)");
        assert!(nodes[2].text().starts_with("VALUES"));
        assert!(nodes[2].text().contains("'Alice'"));
    }
}
