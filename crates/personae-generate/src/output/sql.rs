use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use personae_core::Dataset;

use super::rows;
use crate::errors::GenerationError;

const CREATE_PERSONS: &str = "CREATE TABLE IF NOT EXISTS persons
(
    ID INTEGER NOT NULL PRIMARY KEY,
    lastname TEXT NOT NULL,
    firstname TEXT NOT NULL,
    patronymic TEXT NOT NULL,
    sex TEXT NOT NULL,
    date_of_birth DATE NOT NULL
);
";

const CREATE_CONTACTS: &str = "CREATE TABLE IF NOT EXISTS contacts
(
    ID INTEGER NOT NULL,
    phone TEXT NOT NULL,
    email TEXT,
    FOREIGN KEY (ID) REFERENCES persons (ID) ON DELETE CASCADE
);
";

const CREATE_LOCATIONS: &str = "CREATE TABLE IF NOT EXISTS locations
(
    ID INTEGER NOT NULL,
    region TEXT NOT NULL,
    locality TEXT NOT NULL,
    FOREIGN KEY (ID) REFERENCES persons (ID) ON DELETE CASCADE
);
";

/// Render the dataset as a single-transaction SQL script.
pub fn render_sql(dataset: &Dataset) -> String {
    let rows = rows(dataset);
    let mut persons = String::new();
    let mut contacts = String::new();
    let mut locations = String::new();

    // Writing into a String cannot fail.
    for row in &rows {
        let _ = writeln!(
            persons,
            "INSERT INTO persons VALUES({},{},{},{},{},{});",
            row.id,
            quote(row.last_name),
            quote(row.first_name),
            quote(row.patronymic),
            quote(row.sex),
            quote(&row.birth_date),
        );
        if let (Some(phone), Some(email)) = (row.phone, row.email) {
            let _ = writeln!(
                contacts,
                "INSERT INTO contacts VALUES({},{},{});",
                row.id,
                quote(phone),
                quote(email)
            );
        }
        if let (Some(region), Some(locality)) = (row.region, row.locality) {
            let _ = writeln!(
                locations,
                "INSERT INTO locations VALUES({},{},{});",
                row.id,
                quote(region),
                quote(locality)
            );
        }
    }

    let mut script = String::from("BEGIN TRANSACTION;\n");
    script.push_str(CREATE_PERSONS);
    if dataset.contacts.is_some() {
        script.push_str(CREATE_CONTACTS);
    }
    if dataset.locations.is_some() {
        script.push_str(CREATE_LOCATIONS);
    }
    script.push_str(&persons);
    script.push_str(&contacts);
    script.push_str(&locations);
    script.push_str("COMMIT;\n");
    script
}

pub fn write_dataset_sql(path: &Path, dataset: &Dataset) -> Result<u64, GenerationError> {
    let script = render_sql(dataset);
    fs::write(path, &script)?;
    Ok(script.len() as u64)
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
