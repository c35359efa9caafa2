use crate::*;
use std::path::PathBuf;

/// Turn the INSERT statements of a SQL dump into Laravel seeder snippets.
#[derive(clap::Parser, Debug)]
#[command(name = "sqlseed", version, about)]
pub struct Args {
    /// SQL dump to read (must end in .sql)
    pub file: PathBuf,

    /// Comma separated tables to convert, instead of asking
    #[arg(long, value_delimiter = ',')]
    pub tables: Option<Vec<String>>,

    /// Use the derived class name for every table, instead of asking
    #[arg(long)]
    pub defaults: bool,

    /// Directory receiving the seeder files [env: SQLSEED_OUTPUT_DIR]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// PHP namespace of the model classes [env: SQLSEED_NAMESPACE]
    #[arg(long)]
    pub namespace: Option<String>,

    /// SQL dialect of the dump [env: SQLSEED_DIALECT]
    #[arg(long, value_enum)]
    pub dialect: Option<SqlDialect>,

    /// Split rows and cells on raw `),` and `,` like older seeders did
    #[arg(long)]
    pub legacy_split: bool,

    /// What to do with a row holding a non-integer `*_id` value
    #[arg(long, value_enum, default_value = "abort")]
    pub on_error: RowErrorPolicy,

    /// Print debug diagnostics on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
