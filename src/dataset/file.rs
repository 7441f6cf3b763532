use anyhow::{anyhow, ensure, Context as _, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::{format_decimal_columns, Dataset};

/// Amount columns in YNAB import files are written with cents.
const DECIMAL_PLACES: u32 = 2;

pub fn read(path: &Path) -> Result<Dataset> {
    log::info!("Reading {}...", path.display());
    let file = File::open(path).with_context(|| anyhow!("Error reading file {}", path.display()))?;
    let dataset =
        read_from(file).with_context(|| anyhow!("Error reading file {}", path.display()))?;
    log::info!(
        "Reading {}...done ({} columns, {} rows)",
        path.display(),
        dataset.columns().len(),
        dataset.num_rows(),
    );
    Ok(dataset)
}

fn read_from(input_stream: impl Read) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(input_stream);
    let mut columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    ensure!(
        columns.iter().any(|column| !column.is_empty()),
        "The file has no header row"
    );
    if let Some(first) = columns.first_mut() {
        maybe_remove_byte_order_mark(first);
    }
    name_unnamed_columns(&mut columns);
    let rows = reader
        .records()
        .map(|record| -> Result<Vec<String>> {
            Ok(record?.iter().map(str::to_string).collect())
        })
        .collect::<Result<Vec<Vec<String>>>>()?;
    Dataset::new(columns, rows)
}

/// Empty headers, e.g. from a trailing comma, become `Unnamed: <index>`.
fn name_unnamed_columns(columns: &mut [String]) {
    for (index, column) in columns.iter_mut().enumerate() {
        if column.is_empty() {
            *column = format!("Unnamed: {}", index);
        }
    }
}

fn maybe_remove_byte_order_mark(content: &mut String) {
    if content.starts_with('\u{FEFF}') {
        content.remove(0);
    }
}

/// Write the dataset as CSV, with decimal columns formatted to cents.
pub fn write(dataset: Dataset, path: &Path) -> Result<()> {
    log::info!("Writing {}...", path.display());
    let file =
        File::create(path).with_context(|| anyhow!("Error writing to file {}", path.display()))?;
    write_to(dataset, file).with_context(|| anyhow!("Error writing to file {}", path.display()))?;
    log::info!("Writing {}...done", path.display());
    Ok(())
}

fn write_to(mut dataset: Dataset, output_stream: impl Write) -> Result<()> {
    format_decimal_columns(&mut dataset, DECIMAL_PLACES);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_writer(output_stream);
    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::dataset;

    const SAMPLE_CSV: &str = "Transaction Date,Description,Amount
2023-01-01,Grocery Store,-50.00
2023-01-02,\"Salary, January\",1000.00
";

    #[test]
    fn read_sample() {
        let data = read_from(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(
            dataset(
                &["Transaction Date", "Description", "Amount"],
                &[
                    &["2023-01-01", "Grocery Store", "-50.00"],
                    &["2023-01-02", "Salary, January", "1000.00"],
                ],
            ),
            data
        );
    }

    #[test]
    fn read_strips_byte_order_mark() {
        let input = format!("\u{FEFF}{}", SAMPLE_CSV);
        let data = read_from(input.as_bytes()).unwrap();
        assert_eq!("Transaction Date", data.columns()[0]);
    }

    #[test]
    fn read_header_only() {
        let data = read_from("Date,Amount\n".as_bytes()).unwrap();
        assert_eq!(["Date", "Amount"], data.columns());
        assert_eq!(0, data.num_rows());
    }

    #[test]
    fn read_names_empty_headers() {
        let data = read_from("Date,,Amount,\n2023-01-01,x,1.50,\n".as_bytes()).unwrap();
        assert_eq!(
            dataset(
                &["Date", "Unnamed: 1", "Amount", "Unnamed: 3"],
                &[&["2023-01-01", "x", "1.50", ""]],
            ),
            data
        );
    }

    #[test]
    fn read_empty_file() {
        let err = read_from("".as_bytes()).unwrap_err();
        assert_eq!("The file has no header row", err.to_string());
    }

    #[test]
    fn read_ragged_file() {
        assert!(read_from("Date,Amount\n2023-01-01\n".as_bytes()).is_err());
    }

    #[test]
    fn read_duplicate_header() {
        let err = read_from("Amount,Amount\n1,2\n".as_bytes()).unwrap_err();
        assert_eq!("Column \"Amount\" appears more than once", err.to_string());
    }

    #[test]
    fn read_nonexisting_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nonexistent.csv");

        let err = read(&path).unwrap_err();
        assert_eq!(
            format!("Error reading file {}", path.display()),
            err.to_string()
        );
    }

    #[test]
    fn write_formats_amounts() {
        let data = dataset(
            &["Date", "Payee", "Amount"],
            &[
                &["2023-01-01", "Test Payment", "-50.0"],
                &["2023-01-02", "Test, Deposit", "100"],
            ],
        );

        let mut output = vec![];
        write_to(data, &mut output).unwrap();

        assert_eq!(
            "Date,Payee,Amount\n2023-01-01,Test Payment,-50.00\n2023-01-02,\"Test, Deposit\",100.00\n",
            String::from_utf8(output).unwrap()
        );
    }

    #[test]
    fn write_and_read_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("test.csv");
        let data = read_from(SAMPLE_CSV.as_bytes()).unwrap();

        write(data.clone(), &path).unwrap();
        let read_back = read(&path).unwrap();

        assert_eq!(data, read_back);
    }

    #[test]
    fn write_into_missing_directory() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("missing").join("test.csv");

        let err = write(dataset(&["Date"], &[]), &path).unwrap_err();
        assert_eq!(
            format!("Error writing to file {}", path.display()),
            err.to_string()
        );
    }
}
