use crate::*;
use std::io::{BufRead, Write};

/// Question/answer exchange with the user over any reader/writer pair.
/// Screens produced by [`Layout`] are written to the same output.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line. End of input reads as an empty
    /// answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn select_tables(&mut self) -> Result<Vec<String>> {
        let answer = self.ask("Enter the table names to convert (separated by commas): ")?;
        Ok(parse_table_list(&answer))
    }

    /// Ask for the model class of `table`. An empty answer keeps `default`.
    pub fn class_name(&mut self, table: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!(
            "Enter the PHP class name for table {table}: Default is {default} (Press Enter to use default): "
        ))?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    pub fn show(&mut self, lines: &[String]) -> Result {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Table names from a comma separated answer, trimmed, empties dropped.
pub fn parse_table_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
