//! Thin layer over `sqlparser` used by the extractor.
//!
//! The parser does the real lexing and parsing. This module only adds what a
//! dump reader needs on top of it:
//!
//! Modules:
//! - `dialect` : Dialect selection, shared by the CLI and the environment config.
//! - `script`  : Statement-by-statement parsing that survives vendor statements
//!   the parser does not understand.
//! - `node`    : A tagged view over the children of an INSERT statement.
//!
//! Example:
//! ```rust,ignore
//! let statements = parse_script("INSERT INTO t (a) VALUES (1);", SqlDialect::MySql)?;
//! let Statement::Insert(insert) = &statements[0] else { unreachable!() };
//! let nodes = Node::children(insert);
//! assert!(matches!(nodes[0], Node::Name(_)));
//! ```

pub mod dialect;
pub mod node;
pub mod script;

pub use dialect::SqlDialect;
pub use node::Node;
pub use script::{StatementKind, parse_script};
