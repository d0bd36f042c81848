use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use personae_core::Dataset;

use super::rows;

const PERSON_HEADERS: [&str; 6] = ["ID", "Фамилия", "Имя", "Отчество", "Пол", "Дата рождения"];
const CONTACT_HEADERS: [&str; 2] = ["Телефон", "E-mail"];
const LOCATION_HEADERS: [&str; 2] = ["Регион", "Населённый пункт"];

/// Header row for the column groups present in `dataset`.
pub fn headers(dataset: &Dataset) -> Vec<&'static str> {
    let mut headers = PERSON_HEADERS.to_vec();
    if dataset.contacts.is_some() {
        headers.extend(CONTACT_HEADERS);
    }
    if dataset.locations.is_some() {
        headers.extend(LOCATION_HEADERS);
    }
    headers
}

/// Write the dataset as CSV, quoting every non-numeric field.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(counting);

    writer.write_record(headers(dataset))?;

    for row in rows(dataset) {
        let id = row.id.to_string();
        let mut record = vec![
            id.as_str(),
            row.last_name,
            row.first_name,
            row.patronymic,
            row.sex,
            row.birth_date.as_str(),
        ];
        record.extend(row.phone);
        record.extend(row.email);
        record.extend(row.region);
        record.extend(row.locality);
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
