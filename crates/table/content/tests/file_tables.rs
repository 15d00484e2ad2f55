use std::fs;
use std::sync::Arc;

use table_content::{TableContent, TableFormat, TablesConfig};
use table_core::{
    DataSelection, SeededDice, SelectionError, TableError, TableMapper, TypeAndAmount,
};
use tempfile::TempDir;

const MONSTERS: &str = r#"
[[entries]]
lower = 1
upper = 60
content = "Goblin@1d4"

[[entries]]
lower = 61
upper = 100
content = "Orc@2d6"
"#;

fn resource_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Monsters.toml"), MONSTERS).unwrap();
    dir
}

#[test]
fn loads_and_expands_percentile_table() {
    let dir = resource_root();
    let content = TableContent::from_config(TablesConfig::new(dir.path()));

    let rows = content.tables().map("Monsters").unwrap();
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[&1], "Goblin@1d4");
    assert_eq!(rows[&60], "Goblin@1d4");
    assert_eq!(rows[&61], "Orc@2d6");
    assert_eq!(rows[&100], "Orc@2d6");
}

#[test]
fn cached_table_survives_file_removal() {
    let dir = resource_root();
    let content = TableContent::from_config(TablesConfig::new(dir.path()));

    let first = content.tables().map("Monsters").unwrap();
    fs::remove_file(dir.path().join("Monsters.toml")).unwrap();

    let second = content.tables().map("Monsters").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn missing_table_is_retried_once_written() {
    let dir = tempfile::tempdir().unwrap();
    let content = TableContent::from_config(TablesConfig::new(dir.path()));

    assert!(matches!(
        content.tables().map("Monsters"),
        Err(TableError::NotFound { .. })
    ));
    assert!(!content.tables().is_cached("Monsters"));

    fs::write(dir.path().join("Monsters.toml"), MONSTERS).unwrap();
    let rows = content.tables().map("Monsters").unwrap();
    assert_eq!(rows.len(), 100);
    assert!(content.tables().is_cached("Monsters"));
}

#[test]
fn malformed_table_is_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Broken.toml"), "[[entries]]\nlower = \"one\"\n").unwrap();
    let content = TableContent::from_config(TablesConfig::new(dir.path()));

    assert!(matches!(
        content.tables().map("Broken"),
        Err(TableError::Parse { .. })
    ));
    assert_eq!(content.tables().cached_len(), 0);
}

#[test]
fn ron_resource_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Weather.ron"),
        r#"(entries: [(lower: 1, upper: 2, content: "Rain@1"), (lower: 3, content: "Sun@1")])"#,
    )
    .unwrap();
    let config = TablesConfig::new(dir.path()).with_format(TableFormat::Ron);
    let content = TableContent::from_config(config);

    assert_eq!(content.selector().select_from("Weather", 3).unwrap(), "Sun@1");
    assert_eq!(
        content.selector().select_all_results("Weather").unwrap(),
        vec!["Rain@1".to_owned(), "Sun@1".to_owned()]
    );
}

#[test]
fn selector_decodes_rows_from_files() {
    let dir = resource_root();
    let content = TableContent::from_config(TablesConfig::new(dir.path()));
    let dice = SeededDice::new(2024);

    let goblin: TypeAndAmount = content.selector().select_from_as("Monsters", 42).unwrap();
    assert_eq!(goblin.kind(), "Goblin");
    assert_eq!(goblin.format().unwrap(), "Goblin@1d4");

    for _ in 0..50 {
        let monster: TypeAndAmount = content.selector().select_random_as("Monsters", &dice).unwrap();
        let (min, max) = monster.amount_range();
        let amount = monster.amount(&dice);
        assert!((min..=max).contains(&amount));
    }

    assert!(matches!(
        content.selector().select_from("Monsters", 101),
        Err(SelectionError::RollNotInTable { roll: 101, .. })
    ));
    assert_eq!(content.tables().cached_len(), 1);
}

#[test]
fn bundled_tables_decode_as_type_and_amount() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data/tables");

    let toml = TableContent::from_config(TablesConfig::new(&root));
    for table in ["Monsters", "Treasure"] {
        let rows = toml.tables().map(table).unwrap();
        assert_eq!(rows.len(), 100, "{table} should cover 1..=100");
        let records: Vec<TypeAndAmount> = toml.selector().select_all_as(table).unwrap();
        assert!(!records.is_empty());
    }

    let ron = TableContent::from_config(TablesConfig::new(&root).with_format(TableFormat::Ron));
    let weather: Vec<TypeAndAmount> = ron.selector().select_all_as("Weather").unwrap();
    assert_eq!(weather.len(), 4);
}
