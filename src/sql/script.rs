use crate::*;
use sqlparser::ast::Statement;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;

/// Coarse classification of a parsed statement. Only the kinds the dump
/// reader acts upon get their own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StatementKind {
    #[display("INSERT")]
    Insert,
    #[display("CREATE TABLE")]
    CreateTable,
    #[display("OTHER")]
    Other,
}

impl StatementKind {
    pub fn of(statement: &Statement) -> Self {
        match statement {
            Statement::Insert(_) => StatementKind::Insert,
            Statement::CreateTable(_) => StatementKind::CreateTable,
            _ => StatementKind::Other,
        }
    }
}

/// Parse a whole SQL script into statements.
///
/// Dumps routinely carry vendor statements the parser rejects (`LOCK TABLES`,
/// `SET` variants, ...). Rather than failing the whole file, a statement that
/// does not parse is logged and skipped up to the next `;`. Only a tokenizer
/// failure (e.g. an unterminated string) aborts, since no statement boundary
/// can be trusted after it.
pub fn parse_script(sql: &str, dialect: SqlDialect) -> Result<Vec<Statement>> {
    let dialect = dialect.parser_dialect();
    let mut parser = Parser::new(dialect.as_ref()).try_with_sql(sql)?;
    let mut statements = Vec::new();
    let mut skipped = 0usize;

    loop {
        while parser.consume_token(&Token::SemiColon) {}
        if parser.peek_token().token == Token::EOF {
            break;
        }

        match parser.parse_statement() {
            Ok(statement) => {
                trace!("Parsed {} statement", StatementKind::of(&statement));
                statements.push(statement);
            }
            Err(err) => {
                skipped += 1;
                warn!("Skipping statement the parser does not understand: {err}");
                skip_statement(&mut parser);
            }
        }
    }

    debug!(
        "Parsed {} statements ({skipped} skipped)",
        statements.len()
    );
    Ok(statements)
}

/// Advance past the remainder of the current statement, including its `;`.
fn skip_statement(parser: &mut Parser<'_>) {
    loop {
        match parser.next_token().token {
            Token::SemiColon | Token::EOF => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest]
    #[case("INSERT INTO t (a) VALUES (1)", StatementKind::Insert)]
    #[case("CREATE TABLE t (a INT)", StatementKind::CreateTable)]
    #[case("SELECT 1", StatementKind::Other)]
    #[case("DROP TABLE IF EXISTS t", StatementKind::Other)]
    fn classifies_statements(#[case] sql: &str, #[case] expected: StatementKind) {
        let statements = parse_script(sql, SqlDialect::MySql).expect("statement should parse");
        assert_eq!(statements.len(), 1);
        assert_eq!(StatementKind::of(&statements[0]), expected);
    }

    #[test]
    fn splits_a_script_into_statements() {
        common_init();
        let statements = parse_script(DUMP, SqlDialect::MySql).expect("fixture should parse");
        let kinds = statements.iter().map(StatementKind::of).collect::<Vec<_>>();
        assert_eq!(
            kinds.iter().filter(|k| **k == StatementKind::Insert).count(),
            4,
            "unexpected statement kinds {kinds:?}"
        );
        assert_eq!(
            kinds
                .iter()
                .filter(|k| **k == StatementKind::CreateTable)
                .count(),
            2
        );
    }

    #[test]
    fn skips_statements_the_parser_rejects() {
        common_init();
        let sql = "INSERT INTO a (x) VALUES (1);\n\
                   THIS IS NOT SQL AT ALL;\n\
                   INSERT INTO b (y) VALUES (2);";
        let statements = parse_script(sql, SqlDialect::MySql).expect("script should parse");
        assert_eq!(statements.len(), 2);
        assert!(
            statements
                .iter()
                .all(|s| StatementKind::of(s) == StatementKind::Insert)
        );
    }

    #[test]
    fn tolerates_blank_statements() {
        let statements = parse_script(";;\nINSERT INTO a (x) VALUES (1);;\n", SqlDialect::MySql)
            .expect("script should parse");
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn empty_script_has_no_statements() {
        let statements = parse_script("  -- nothing here\n", SqlDialect::MySql)
            .expect("comment-only script should parse");
        assert!(statements.is_empty());
    }

    #[test]
    fn tokenizer_errors_are_reported() {
        let err = parse_script("INSERT INTO a (x) VALUES ('unterminated", SqlDialect::MySql)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidQuery(_)), "got {err:?}");
    }
}
