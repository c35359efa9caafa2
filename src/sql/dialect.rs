use crate::*;
use sqlparser::dialect::{Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use std::str::FromStr;

/// SQL flavour of the dump being read. Defaults to MySQL since that is what
/// `mysqldump` and most Laravel projects produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, derive_more::Display)]
pub enum SqlDialect {
    #[default]
    #[display("mysql")]
    #[value(name = "mysql")]
    MySql,
    #[display("postgres")]
    #[value(alias = "postgresql")]
    Postgres,
    #[display("sqlite")]
    Sqlite,
    #[display("generic")]
    Generic,
}

impl SqlDialect {
    pub fn parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::MySql => Box::new(MySqlDialect {}),
            SqlDialect::Postgres => Box::new(PostgreSqlDialect {}),
            SqlDialect::Sqlite => Box::new(SQLiteDialect {}),
            SqlDialect::Generic => Box::new(GenericDialect {}),
        }
    }
}

impl FromStr for SqlDialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <SqlDialect as clap::ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| Error::Config(format!("unknown SQL dialect '{s}'")))
    }
}
