use sqlparser::ast::{Expr, UnaryOperator, Value};

/// Text of one VALUES cell, taken from the parser's own expression.
///
/// - `NULL` stays `NULL`
/// - numbers keep their literal digits, a negation becomes a leading `-`
/// - string literals give their unquoted content, untouched
/// - `TRUE`/`FALSE` become `1`/`0`, the way MySQL stores them
/// - anything else (function calls, casts, ...) is rendered back to SQL
pub fn cell_text(expr: &Expr) -> String {
    match expr {
        Expr::Value(value) => value_text(&value.value),
        Expr::UnaryOp {
            op: UnaryOperator::Minus,
            expr: inner,
        } => match inner.as_ref() {
            Expr::Value(value) if matches!(value.value, Value::Number(..)) => {
                format!("-{}", value_text(&value.value))
            }
            _ => expr.to_string(),
        },
        Expr::Nested(inner) => cell_text(inner),
        other => other.to_string(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Number(raw, _) => raw.clone(),
        Value::Boolean(true) => "1".to_string(),
        Value::Boolean(false) => "0".to_string(),
        Value::SingleQuotedString(s)
        | Value::DoubleQuotedString(s)
        | Value::TripleSingleQuotedString(s)
        | Value::TripleDoubleQuotedString(s)
        | Value::EscapedStringLiteral(s)
        | Value::UnicodeStringLiteral(s)
        | Value::NationalStringLiteral(s) => s.clone(),
        other => other.to_string(),
    }
}
