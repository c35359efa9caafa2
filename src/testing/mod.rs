#![cfg(test)]
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .try_init();
    });
}

/// A small dump shaped like `mysqldump` output: two tables with a schema, one
/// INSERT relying on that schema for its columns, one table split over two
/// INSERTs and one table without a schema at all.
pub(crate) const DUMP: &str = r#"-- MySQL dump of the `shop` database
DROP TABLE IF EXISTS `users`;
CREATE TABLE `users` (
  `id` int NOT NULL,
  `name` varchar(255) DEFAULT NULL,
  `is_admin` tinyint(1) NOT NULL DEFAULT '0',
  `team_id` int DEFAULT NULL,
  PRIMARY KEY (`id`)
);

LOCK TABLES `users` WRITE;
INSERT INTO `users` (`id`, `name`, `is_admin`, `team_id`) VALUES (1,'Alice',1,3),(2,'Bob',0,NULL);
INSERT INTO `users` (`id`, `name`, `is_admin`, `team_id`) VALUES (3,'Carol, Jr.',0,4);
UNLOCK TABLES;

CREATE TABLE `posts` (
  `id` int NOT NULL,
  `title` varchar(255) NOT NULL,
  `user_id` int NOT NULL
);
INSERT INTO `posts` VALUES (1,'Hello, world',1),(2,'Second post',2);

INSERT INTO `categories` (`id`, `name`) VALUES (1,'News'),(2,'Rust');
"#;
