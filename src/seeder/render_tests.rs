#![cfg(test)]
use crate::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn group(columns: &[&str], rows: &[&[&str]]) -> TableGroup {
    TableGroup::new(
        "users",
        TableInsertRecord {
            table_name: Some("users".into()),
            columns: strings(columns),
            values: rows.iter().map(|row| strings(row)).collect(),
        },
    )
}

#[cfg(test)]
mod render_testing {
    use super::*;

    #[test]
    fn renders_create_call() {
        let out = render(
            "User",
            &strings(&["id", "name", "is_admin", "team_id", "bio"]),
            &strings(&["1", "Alice", "1", "3", "NULL"]),
        )
        .expect("row should render");
        assert_eq!(
            out,
            "User::create([\n\
             \t'id' => '1',\n\
             \t'name' => 'Alice',\n\
             \t'is_admin' => true,\n\
             \t'team_id' => 3,\n\
             \t'bio' => null,\n\
             ]);\n\n"
        );
    }

    #[rstest]
    #[case(&["a", "b"], &["1", "2"], 2)]
    #[case(&["a", "b"], &["1", "2", "3", "4"], 2)]
    #[case(&["a", "b", "c"], &["1"], 1)]
    #[case(&[], &["1"], 0)]
    fn one_assignment_per_aligned_position(
        #[case] columns: &[&str],
        #[case] row: &[&str],
        #[case] expected: usize,
    ) {
        let out = render("T", &strings(columns), &strings(row)).expect("row should render");
        assert_eq!(out.matches(" => ").count(), expected);
    }

    #[test]
    fn is_column_with_other_values_is_a_string() {
        let out = render("T", &strings(&["is_active"]), &strings(&["2"])).expect("render");
        assert!(out.contains("'is_active' => '2',"), "{out}");
    }

    #[test]
    fn id_column_with_text_fails() {
        let err = render("T", &strings(&["user_id"]), &strings(&["abc"])).unwrap_err();
        assert!(matches!(err, Error::Coercion { .. }), "got {err:?}");
    }
}

#[cfg(test)]
mod seeder_testing {
    use super::*;

    #[rstest]
    #[case("App\\Models")]
    #[case("App\\Models\\")]
    fn header_references_model_class(#[case] namespace: &str) {
        let seeder = Seeder::new("User", namespace);
        assert_eq!(seeder.header(), "<?php\n\nuse App\\Models\\User;\n\n");
        assert_eq!(seeder.file_name(), "User.php");
    }

    #[test]
    fn renders_every_row_in_order() {
        let group = group(&["id", "name"], &[&["1", "Alice"], &["2", "Bob"]]);
        let out = Seeder::new("User", "App\\Models")
            .render_group(&group, RowErrorPolicy::Abort)
            .expect("group should render");

        assert!(out.starts_with("<?php\n\nuse App\\Models\\User;\n\n"));
        assert_eq!(out.matches("User::create([").count(), 2);
        let alice = out.find("'Alice'").expect("Alice should be rendered");
        let bob = out.find("'Bob'").expect("Bob should be rendered");
        assert!(alice < bob);
    }

    #[test]
    fn rows_of_every_record_use_their_own_columns() {
        let mut group = group(&["id"], &[&["1"]]);
        group.records.push(TableInsertRecord {
            table_name: Some("users".into()),
            columns: strings(&["id", "team_id"]),
            values: vec![strings(&["2", "5"])],
        });
        let out = Seeder::new("User", "App\\Models")
            .render_group(&group, RowErrorPolicy::Abort)
            .expect("group should render");
        assert_eq!(out.matches("User::create([").count(), 2);
        assert!(out.contains("'team_id' => 5,"));
    }

    #[test]
    fn abort_policy_fails_the_whole_group() {
        let group = group(&["team_id"], &[&["1"], &["oops"], &["3"]]);
        let result = Seeder::new("User", "App\\Models").render_group(&group, RowErrorPolicy::Abort);
        assert!(matches!(result, Err(Error::Coercion { .. })));
    }

    #[test]
    fn skip_policy_drops_only_bad_rows() {
        common_init();
        let group = group(&["team_id"], &[&["1"], &["oops"], &["3"]]);
        let out = Seeder::new("User", "App\\Models")
            .render_group(&group, RowErrorPolicy::Skip)
            .expect("skip policy should not fail");
        assert_eq!(out.matches("User::create([").count(), 2);
        assert!(out.contains("'team_id' => 1,"));
        assert!(out.contains("'team_id' => 3,"));
        assert!(!out.contains("oops"));
    }

    #[test]
    fn quotes_in_dump_values_stay_valid_php() {
        let sql = r"INSERT INTO people (id, name, team_id) VALUES (1, 'it''s', 9), (2, 'O\'Brien', 18446744073709551615);";
        let statements = parse_script(sql, SqlDialect::MySql).expect("dump should parse");
        let groups = group_inserts(&statements, ExtractMode::Structured);
        let out = Seeder::new("Person", "App\\Models")
            .render_group(&groups[0], RowErrorPolicy::Abort)
            .expect("group should render");
        assert!(out.contains(r"'name' => 'it\'s',"), "{out}");
        assert!(out.contains(r"'name' => 'O\'Brien',"), "{out}");
        assert!(out.contains("'team_id' => 18446744073709551615,"), "{out}");
    }
}
