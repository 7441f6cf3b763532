use console::{measure_text_width, pad_str, style, Alignment};

use super::Operator;
use crate::dataset::Dataset;
use crate::mapping::MappingSet;

const COLUMN_SEPARATOR: &str = "  ";

/// Show the header and the first `num_rows` rows as an aligned table.
pub fn show_sample_rows(operator: &mut impl Operator, dataset: &Dataset, num_rows: usize) {
    let sample = dataset.head(num_rows);
    operator.show("");
    operator.show(
        &style(format!(
            "Sample of the first {} rows in the CSV file:",
            num_rows
        ))
        .bold()
        .to_string(),
    );
    for line in format_table(&sample) {
        operator.show(&line);
    }
    operator.show("");
}

fn format_table(dataset: &Dataset) -> Vec<String> {
    let widths: Vec<usize> = dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            dataset
                .column_values(index)
                .map(measure_text_width)
                .chain(std::iter::once(measure_text_width(column)))
                .max()
                .unwrap_or(0)
        })
        .collect();
    std::iter::once(dataset.columns())
        .chain(dataset.rows().iter().map(Vec::as_slice))
        .map(|cells| format_row(cells, &widths))
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_str(cell, width, Alignment::Right, None).into_owned())
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

pub fn show_mapping(operator: &mut impl Operator, mappings: &MappingSet) {
    operator.show(&style("Field mapping:").bold().underlined().to_string());
    for mapping in mappings.iter() {
        operator.show(&format!("\t{}", mapping));
    }
    operator.show("");
}
