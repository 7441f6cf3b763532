use rust_decimal::{Decimal, RoundingStrategy};

use super::Dataset;

/// Rewrite every decimal column so all its values have exactly `decimal_places` places.
///
/// A column counts as decimal if all its non-empty values are plain numbers and it either
/// has a value with a decimal point or has empty cells. Integer-only columns without gaps
/// and text columns are left alone.
pub fn format_decimal_columns(dataset: &mut Dataset, decimal_places: u32) {
    let decimal_columns: Vec<usize> = (0..dataset.columns().len())
        .filter(|&index| is_decimal_column(dataset.column_values(index)))
        .collect();
    if decimal_columns.is_empty() {
        return;
    }
    log::debug!(
        "Formatting columns {:?} with {} decimal places",
        decimal_columns
            .iter()
            .map(|&index| dataset.columns()[index].as_str())
            .collect::<Vec<_>>(),
        decimal_places,
    );
    for row in dataset.rows_mut() {
        for &index in &decimal_columns {
            if let Some(amount) = parse_amount(&row[index]) {
                row[index] = format_amount(amount, decimal_places);
            }
        }
    }
}

fn is_decimal_column<'a>(values: impl Iterator<Item = &'a str>) -> bool {
    let mut has_value = false;
    let mut has_gap_or_fraction = false;
    for value in values {
        if value.is_empty() {
            has_gap_or_fraction = true;
            continue;
        }
        if parse_amount(value).is_none() {
            return false;
        }
        has_value = true;
        has_gap_or_fraction |= value.contains('.');
    }
    has_value && has_gap_or_fraction
}

/// Only accepts plain numbers like `-12.5` or `3`, no currency symbols or thousands separators.
fn parse_amount(value: &str) -> Option<Decimal> {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let is_plain_number = !integer.is_empty()
        && integer.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
        && !digits.ends_with('.');
    if !is_plain_number {
        return None;
    }
    Decimal::from_str_exact(value.strip_prefix('+').unwrap_or(value)).ok()
}

fn format_amount(amount: Decimal, decimal_places: u32) -> String {
    let mut amount =
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);
    amount.rescale(decimal_places);
    amount.to_string()
}
