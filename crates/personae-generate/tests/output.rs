use std::fs;
use std::path::PathBuf;

use personae_core::DataGroups;
use personae_generate::output::{OutputFormat, rows, write_dataset};
use personae_generate::{GenerateOptions, GenerationEngine, assets};

fn temp_out_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("personae_out_{label}_{}", uuid::Uuid::new_v4()))
}

fn dataset(groups: DataGroups, total: usize) -> personae_core::Dataset {
    let engine = GenerationEngine::new(GenerateOptions {
        groups,
        seed: Some(77),
        ..GenerateOptions::default()
    });
    engine
        .run(total, assets().expect("assets"))
        .expect("run")
        .dataset
}

#[test]
fn rows_are_numbered_from_one() {
    let dataset = dataset(DataGroups::Locations, 25);
    let rows = rows(&dataset);
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[24].id, 25);
    assert!(rows.iter().all(|row| row.region.is_some() && row.phone.is_none()));
    assert_eq!(rows[3].last_name, dataset.persons[3].last_name);
}

#[test]
fn csv_has_russian_headers_and_one_line_per_person() {
    let dir = temp_out_dir("csv");
    let dataset = dataset(DataGroups::Full, 40);
    let path = write_dataset(&dir, "people", OutputFormat::Csv, &dataset).expect("write csv");
    assert_eq!(path, dir.join("people.csv"));

    let contents = fs::read_to_string(&path).expect("read csv");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some(
            "\"ID\",\"Фамилия\",\"Имя\",\"Отчество\",\"Пол\",\"Дата рождения\",\
             \"Телефон\",\"E-mail\",\"Регион\",\"Населённый пункт\""
        )
    );
    let first = lines.next().expect("first row");
    assert!(first.starts_with("1,\""), "{first}");
    assert_eq!(contents.lines().count(), 41);
}

#[test]
fn base_csv_has_only_person_columns() {
    let dir = temp_out_dir("csv_base");
    let dataset = dataset(DataGroups::Base, 5);
    let path = write_dataset(&dir, "base", OutputFormat::Csv, &dataset).expect("write csv");
    let contents = fs::read_to_string(path).expect("read csv");
    let header = contents.lines().next().expect("header");
    assert_eq!(header.split(',').count(), 6);
}

#[test]
fn sql_script_is_one_transaction() {
    let dir = temp_out_dir("sql");
    let dataset = dataset(DataGroups::Contacts, 30);
    let path = write_dataset(&dir, "dump", OutputFormat::Sql, &dataset).expect("write sql");
    let script = fs::read_to_string(path).expect("read sql");

    assert!(script.starts_with("BEGIN TRANSACTION;\n"));
    assert!(script.ends_with("COMMIT;\n"));
    assert!(script.contains("CREATE TABLE IF NOT EXISTS contacts"));
    assert!(!script.contains("CREATE TABLE IF NOT EXISTS locations"));
    assert_eq!(script.matches("INSERT INTO persons VALUES(").count(), 30);
    assert_eq!(script.matches("INSERT INTO contacts VALUES(").count(), 30);
    assert!(script.contains("INSERT INTO persons VALUES(1,'"));
}

#[test]
fn json_lists_rows_with_english_keys() {
    let dir = temp_out_dir("json");
    let dataset = dataset(DataGroups::Full, 12);
    let path = write_dataset(&dir, "people", OutputFormat::Json, &dataset).expect("write json");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).expect("read json")).expect("parse json");

    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(
        rows[0]["birth_date"],
        serde_json::Value::String(dataset.persons[0].birth_date_iso())
    );
    for key in ["last_name", "first_name", "patronymic", "sex", "phone", "email", "region", "locality"] {
        assert!(rows[0].get(key).is_some(), "missing {key}");
    }
}

#[test]
fn misaligned_dataset_is_not_written() {
    let mut dataset = dataset(DataGroups::Contacts, 10);
    if let Some(contacts) = dataset.contacts.as_mut() {
        contacts.pop();
    }
    let dir = temp_out_dir("misaligned");
    assert!(write_dataset(&dir, "broken", OutputFormat::Csv, &dataset).is_err());
}

#[test]
fn formats_parse_case_insensitively() {
    assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
    assert_eq!("sql".parse::<OutputFormat>(), Ok(OutputFormat::Sql));
    assert!("xlsx".parse::<OutputFormat>().is_err());
}
