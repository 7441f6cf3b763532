use anyhow::{bail, ensure, Result};
use std::collections::HashSet;

mod decimal;
pub mod file;

pub use decimal::format_decimal_columns;

/// A table of string values with uniquely named columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                bail!("Column {:?} appears more than once", column);
            }
        }
        for (index, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == columns.len(),
                "Row {} has {} values but there are {} columns",
                index + 1,
                row.len(),
                columns.len(),
            );
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row[index].as_str())
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }
}

#[cfg(test)]
pub(crate) fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect(),
    )
    .unwrap()
}
