use crate::*;
use confique::Config as _;

const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Settings read from the environment. Command line flags take precedence,
/// see [`Settings::resolve`].
#[derive(confique::Config)]
pub struct Config {
    /// Width used to draw separators and dotted listings. Kept raw, since
    /// shells export `COLUMNS` unchecked; see [`Config::terminal_width`].
    #[config(env = "COLUMNS")]
    pub columns: Option<String>,
    /// PHP namespace holding the model classes.
    #[config(env = "SQLSEED_NAMESPACE", default = "App\\Models")]
    pub namespace: String,
    /// SQL dialect handed to the parser (mysql, postgres, sqlite, generic).
    #[config(env = "SQLSEED_DIALECT", default = "mysql")]
    pub dialect: String,
    /// Directory receiving the generated seeder files.
    #[config(env = "SQLSEED_OUTPUT_DIR", default = ".")]
    pub output_dir: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Config::builder()
            .env()
            .load()
            .map_err(|err| Error::Config(err.to_string()))
    }

    /// `COLUMNS` as a width, or 80 when it is unset or not a number.
    pub fn terminal_width(&self) -> usize {
        let Some(columns) = self.columns.as_deref().map(str::trim) else {
            return DEFAULT_TERMINAL_WIDTH;
        };
        columns.parse().unwrap_or_else(|_| {
            warn!("Ignoring COLUMNS={columns:?}, using width {DEFAULT_TERMINAL_WIDTH}");
            DEFAULT_TERMINAL_WIDTH
        })
    }
}
