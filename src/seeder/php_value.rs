use crate::*;

/// A PHP literal as it appears on the right of `'column' =>`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PhpValue {
    #[display("null")]
    Null,
    #[display("{_0}")]
    Bool(bool),
    /// Normalized decimal digits with an optional `-`. Kept as text so keys
    /// beyond `i64` (e.g. `BIGINT UNSIGNED`) pass through unchanged.
    #[display("{_0}")]
    Int(String),
    /// Single quoted, with `\` and `'` backslash-escaped.
    #[display("'{}'", escape_single_quoted(_0))]
    Str(String),
}

impl PhpValue {
    /// Coerce a raw cell into a PHP literal, guided by the column name:
    ///
    /// 1. `NULL` (exact, case-sensitive) is `null` for any column.
    /// 2. `1`/`0` in an `is_*` column is `true`/`false`.
    /// 3. An `*_id` column must hold an integer.
    /// 4. Everything else is a string.
    pub fn coerce(column: &str, value: &str) -> Result<Self> {
        if value == "NULL" {
            return Ok(PhpValue::Null);
        }
        if column.starts_with("is_") && matches!(value, "1" | "0") {
            return Ok(PhpValue::Bool(value == "1"));
        }
        if column.ends_with("_id") {
            return integer_literal(value)
                .map(PhpValue::Int)
                .ok_or_else(|| Error::Coercion {
                    column: column.to_string(),
                    value: value.to_string(),
                });
        }
        Ok(PhpValue::Str(value.to_string()))
    }
}

/// An optional sign followed by ASCII digits, of any length. Leading zeros are
/// dropped since PHP reads `010` as octal.
fn integer_literal(value: &str) -> Option<String> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        digits if negative => format!("-{digits}"),
        digits => digits.to_string(),
    })
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
