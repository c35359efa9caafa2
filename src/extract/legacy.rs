//! Text-splitting heuristics kept for output compatibility.
//!
//! These operate on the rendered SQL of a node and split on raw `,` and `),`.
//! They mis-split values that contain either sequence inside a string literal.

const QUOTES: [char; 3] = ['`', '\'', '"'];

/// Column names from the text of a `table (a, b)` node: everything between
/// the first `(` and the following `)`, split on `,`, trimmed and stripped of
/// backticks. Text without a `(` yields no columns.
pub fn split_columns(text: &str) -> Vec<String> {
    let Some((_, rest)) = text.split_once('(') else {
        return Vec::new();
    };
    let inner = rest.split(')').next().unwrap_or_default();
    inner
        .split(',')
        .map(|column| column.trim().replace('`', ""))
        .collect()
}

/// Rows from the text of a VALUES clause.
///
/// The `VALUES` keyword is removed, groups are split on `),`, each group loses
/// its leading `(` and trailing `)`/`;`, and is then split on `,`. Every cell
/// is trimmed and stripped of backtick, single and double quotes wherever they
/// appear.
pub fn split_values(text: &str) -> Vec<Vec<String>> {
    text.replace("VALUES", "")
        .split("),")
        .map(|group| {
            group
                .trim()
                .trim_start_matches('(')
                .trim_end_matches([')', ';'])
                .trim()
                .split(',')
                .map(|cell| cell.trim().replace(QUOTES, ""))
                .collect()
        })
        .collect()
}
